use folio_core::navigator::Direction;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::Line,
    widgets::{Block, LineGauge, Paragraph},
    Frame,
};

use crate::app::App;

/// Horizontal strip of full-width section panels
///
/// Each panel sits `index - position` strip widths away from the viewport,
/// so while the slide animates two neighbouring panels share the screen.
pub struct SectionStripWidget;

impl SectionStripWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg0)),
            area,
        );
        if area.width < 3 || area.height < 4 {
            return;
        }

        let [top, title, body, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        // One column of padding on both sides
        app.layout_content(area.width - 2, body.height);
        app.hit.content = body;

        let position = app.slide.position();
        for index in 0..app.config.sections.len() {
            let offset = ((index as f64 - position) * area.width as f64).round() as i32;
            if let Some((x, width, clip)) = visible_span(offset, area.width) {
                Self::render_panel(frame, app, index, title, body, x, width, clip);
            }
        }

        if let Some(indicator) = app.navigator.buffer_indicator() {
            let row = if indicator.at_top() { top } else { bottom };
            let label = neighbour_label(app, indicator.direction);
            let gauge = LineGauge::default()
                .filled_style(Style::default().fg(app.theme.buffer))
                .unfilled_style(Style::default().fg(app.theme.bg2))
                .line_set(symbols::line::THICK)
                .label(label)
                .ratio(indicator.progress);
            frame.render_widget(gauge, row);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_panel(
        frame: &mut Frame,
        app: &App,
        index: usize,
        title_row: Rect,
        body: Rect,
        x: u16,
        width: u16,
        clip: u16,
    ) {
        let theme = &app.theme;
        let (Some(section), Some(state)) = (app.section(index), app.sections.get(index)) else {
            return;
        };

        let title_area = Rect::new(title_row.x + x, title_row.y, width, 1);
        let title = Paragraph::new(format!(" {}", section.title))
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .scroll((0, clip));
        frame.render_widget(title, title_area);

        let lines: Vec<Line> = state
            .lines
            .iter()
            .map(|line| Line::from(format!(" {}", line)))
            .collect();
        let body_area = Rect::new(body.x + x, body.y, width, body.height);
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(theme.fg0))
            .scroll((state.scroll, clip));
        frame.render_widget(paragraph, body_area);
    }
}

/// Visible part of a panel shifted `offset` columns from the viewport
///
/// Returns `(x, width, clip)` relative to the strip, where `clip` is the
/// number of panel columns hidden past the left edge.
fn visible_span(offset: i32, strip_width: u16) -> Option<(u16, u16, u16)> {
    let strip = strip_width as i32;
    if offset <= -strip || offset >= strip {
        return None;
    }
    let width = (strip - offset.abs()) as u16;
    if offset >= 0 {
        Some((offset as u16, width, 0))
    } else {
        Some((0, width, (-offset) as u16))
    }
}

fn neighbour_label(app: &App, direction: Direction) -> String {
    let target = app.current().checked_add_signed(direction.sign());
    match target.and_then(|i| app.section(i)) {
        Some(section) => {
            let arrow = match direction {
                Direction::Forward => '→',
                Direction::Backward => '←',
            };
            format!(" {} {} ", arrow, section.title)
        }
        None => String::new(),
    }
}
