use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HELP_HINT: &str = " q:quit h/l:sections j/k:scroll 1-9:jump ";

/// Navigation dots, section and content progress, key hints
pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let view = app.navigator.view();
        let base = Style::default().fg(theme.fg0).bg(theme.bg2);

        let mut spans = vec![Span::styled(" ", base)];
        let mut dots = Vec::with_capacity(view.total);
        let mut x = area.x + 1;
        for active in view.markers() {
            let (symbol, fg) = if active {
                ("●", theme.active)
            } else {
                ("○", theme.grey0)
            };
            dots.push(Rect::new(x, area.y, 1, 1));
            spans.push(Span::styled(symbol, base.fg(fg)));
            spans.push(Span::styled(" ", base));
            x = x.saturating_add(2);
        }

        let title = app
            .section(view.index)
            .map(|s| s.title.as_str())
            .unwrap_or_default();
        let content = match app.content_progress() {
            Some(percent) => format!("{:.0}%", percent),
            None => "all".to_string(),
        };
        let status_text = format!(
            "| {}/{} {} | {:.0}% | content {} ",
            view.index + 1,
            view.total,
            title,
            view.progress_percent(),
            content
        );

        let used: usize = spans.iter().map(|s| s.content.width()).sum::<usize>()
            + status_text.width()
            + HELP_HINT.width();
        let padding = (area.width as usize).saturating_sub(used);

        spans.push(Span::styled(status_text, base));
        spans.push(Span::styled(" ".repeat(padding), base));
        spans.push(Span::styled(HELP_HINT, base.fg(theme.grey2)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        // Dots past the right edge are not clickable
        let right = area.x + area.width;
        dots.retain(|r| r.x < right);
        app.hit.dots = dots;
    }
}
