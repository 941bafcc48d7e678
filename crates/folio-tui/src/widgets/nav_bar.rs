use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const BRAND: &str = " folio ";

/// One link per section; records link areas for click hit testing
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let view = app.navigator.view();
        let base = Style::default().fg(theme.grey2).bg(theme.bg1);

        let mut spans = vec![Span::styled(
            BRAND,
            Style::default()
                .fg(theme.accent)
                .bg(theme.bg1)
                .add_modifier(Modifier::BOLD),
        )];
        let mut links = Vec::with_capacity(app.config.sections.len());
        let mut x = area.x + BRAND.width() as u16;
        let right = area.x + area.width;

        for (index, section) in app.config.sections.iter().enumerate() {
            let label = format!(" {} ", section.title);
            let width = (label.width() as u16).min(right.saturating_sub(x));
            links.push(Rect::new(x, area.y, width, 1));
            x = x.saturating_add(width);

            let style = if view.is_active(index) {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                base
            };
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
        app.hit.links = links;
    }
}
