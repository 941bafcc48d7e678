use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    symbols,
    widgets::LineGauge,
    Frame,
};

use crate::app::App;
use crate::widgets::{NavBarWidget, SectionStripWidget, StatusBarWidget};

/// Draw one frame: nav bar, section progress, section strip, status bar
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [nav, progress, strip, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    NavBarWidget::render(frame, nav, app);

    let view = app.navigator.view();
    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(app.theme.accent))
        .unfilled_style(Style::default().fg(app.theme.bg2))
        .line_set(symbols::line::THICK)
        .label(format!("{:>3.0}% ", view.progress_percent()))
        .ratio(view.progress());
    frame.render_widget(gauge, progress);

    SectionStripWidget::render(frame, strip, app);
    StatusBarWidget::render(frame, status, app);
}
