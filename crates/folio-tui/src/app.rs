use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::navigator::{Direction, NavAction, NavInput, Navigator, ViewUpdate, WheelTarget};
use folio_core::{AppConfig, SectionConfig};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::event::AppEvent;
use crate::gesture::{Gesture, SwipeTracker};
use crate::input::{handle_key_event, Action};
use crate::slide::SlideAnimator;
use crate::text;
use crate::theme::Theme;

/// Lines scrolled per wheel notch when the wheel is not navigating
const WHEEL_SCROLL_LINES: i32 = 3;

/// Screen areas recorded at the last render, for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Scrollable body of the visible section
    pub content: Rect,
    /// Nav link per section
    pub links: Vec<Rect>,
    /// Navigation dot per section
    pub dots: Vec<Rect>,
}

impl HitAreas {
    /// Section bound to the link or dot under the pointer
    pub fn marker_at(&self, position: Position) -> Option<usize> {
        self.links
            .iter()
            .position(|r| r.contains(position))
            .or_else(|| self.dots.iter().position(|r| r.contains(position)))
    }
}

/// Wrapped body and scroll offset of one section
#[derive(Debug, Clone, Default)]
pub struct SectionState {
    pub lines: Vec<String>,
    /// Width the lines were wrapped at
    pub wrapped_width: u16,
    pub scroll: u16,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Section navigation state machine
    pub navigator: Navigator,
    /// Per-section content state, same order as `config.sections`
    pub sections: Vec<SectionState>,
    /// Height of the content viewport at the last render
    pub viewport_height: u16,
    /// Horizontal slide between sections
    pub slide: SlideAnimator,
    /// Press/release tracking for swipes and taps
    pub swipe: SwipeTracker,
    pub theme: Theme,
    pub hit: HitAreas,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal title waiting to be applied
    pending_title: Option<String>,
}

impl App {
    /// Create the app showing section `start`
    pub fn new(config: Arc<AppConfig>, start: usize) -> folio_core::Result<Self> {
        let navigator =
            Navigator::with_start(config.sections.len(), start, config.navigator.clone())?;
        let slide = SlideAnimator::new(
            start,
            config.navigator.transition(),
            config.ui.easing,
        );

        let mut app = Self {
            sections: vec![SectionState::default(); config.sections.len()],
            navigator,
            slide,
            swipe: SwipeTracker::new(),
            theme: Theme::default(),
            hit: HitAreas::default(),
            viewport_height: 0,
            should_quit: false,
            pending_title: None,
            config,
        };
        app.pending_title = Some(app.title_for(start));
        Ok(app)
    }

    pub fn section(&self, index: usize) -> Option<&SectionConfig> {
        self.config.sections.get(index)
    }

    pub fn current(&self) -> usize {
        self.navigator.current()
    }

    pub fn view(&self) -> ViewUpdate {
        self.navigator.view()
    }

    fn title_for(&self, index: usize) -> String {
        match self.section(index) {
            Some(section) => format!("Folio - {}", section.title),
            None => "Folio".to_string(),
        }
    }

    /// Terminal title to set, once per navigation
    pub fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// Re-wrap section bodies for a new viewport size
    pub fn layout_content(&mut self, width: u16, height: u16) {
        self.viewport_height = height;
        for (index, state) in self.sections.iter_mut().enumerate() {
            if state.wrapped_width != width {
                if let Some(section) = self.config.sections.get(index) {
                    state.lines = text::wrap(&section.body, width);
                }
                state.wrapped_width = width;
            }
            let max = max_scroll(state, height);
            state.scroll = state.scroll.min(max);
        }
    }

    pub fn max_scroll(&self, index: usize) -> u16 {
        self.sections
            .get(index)
            .map(|state| max_scroll(state, self.viewport_height))
            .unwrap_or(0)
    }

    /// Whether the active section's content sits at its top and bottom
    pub fn content_bounds(&self) -> (bool, bool) {
        let index = self.current();
        let scroll = self.sections.get(index).map(|s| s.scroll).unwrap_or(0);
        (scroll == 0, scroll >= self.max_scroll(index))
    }

    /// Percentage of the active section's content scrolled past
    ///
    /// `None` when the content fits without scrolling.
    pub fn content_progress(&self) -> Option<f64> {
        let index = self.current();
        let max = self.max_scroll(index);
        if max == 0 {
            return None;
        }
        let scroll = self.sections.get(index).map(|s| s.scroll).unwrap_or(0);
        Some(scroll as f64 / max as f64 * 100.0)
    }

    /// Scroll the active section's content (positive = down)
    pub fn scroll_content(&mut self, lines: i32) {
        let index = self.current();
        let max = self.max_scroll(index);
        if let Some(state) = self.sections.get_mut(index) {
            state.scroll = (state.scroll as i32 + lines).clamp(0, max as i32) as u16;
        }
    }

    fn set_content_scroll(&mut self, scroll: u16) {
        let index = self.current();
        let max = self.max_scroll(index);
        if let Some(state) = self.sections.get_mut(index) {
            state.scroll = scroll.min(max);
        }
    }

    /// Route a terminal event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(key) => {
                let action = handle_key_event(key);
                self.handle_action(action, now);
            }
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            AppEvent::Resize(_, _) => {
                // A gesture spanning a resize has meaningless coordinates
                self.swipe.cancel();
            }
            AppEvent::Tick => self.on_timer(now),
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(direction) => self.dispatch(NavInput::Key(direction), now),
            Action::JumpTo(index) => self.dispatch(NavInput::Click(index), now),
            Action::ScrollLines(lines) => self.scroll_content(lines),
            Action::ScrollPageDown => {
                let page = (self.viewport_height / 2).max(1) as i32;
                self.scroll_content(page);
            }
            Action::ScrollPageUp => {
                let page = (self.viewport_height / 2).max(1) as i32;
                self.scroll_content(-page);
            }
            Action::ScrollTop => self.set_content_scroll(0),
            Action::ScrollBottom => self.set_content_scroll(u16::MAX),
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_wheel(Direction::Forward, position, now),
            MouseEventKind::ScrollUp => self.handle_wheel(Direction::Backward, position, now),
            MouseEventKind::Down(MouseButton::Left) => self.swipe.start(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                match self.swipe.finish(mouse.column, mouse.row) {
                    Some(Gesture::Tap { column, row }) => {
                        if let Some(index) = self.hit.marker_at(Position::new(column, row)) {
                            self.dispatch(NavInput::Click(index), now);
                        }
                    }
                    Some(Gesture::Swipe { delta_columns }) => {
                        let delta_x = delta_columns as f64 * self.config.ui.cell_width;
                        self.dispatch(NavInput::Swipe(delta_x), now);
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn handle_wheel(&mut self, direction: Direction, position: Position, now: Instant) {
        let in_content = self.hit.content.contains(position);
        let target = if in_content {
            let (at_top, at_bottom) = self.content_bounds();
            WheelTarget::Content { at_top, at_bottom }
        } else {
            WheelTarget::Outside
        };
        let delta_y = direction.sign() as f64 * self.config.ui.wheel_delta;

        let action = self.navigator.dispatch(NavInput::Wheel { delta_y, target }, now);
        if action == NavAction::PassThrough && in_content {
            self.scroll_content(direction.sign() as i32 * WHEEL_SCROLL_LINES);
        }
        self.apply(action, now);
    }

    fn dispatch(&mut self, input: NavInput, now: Instant) {
        let action = self.navigator.dispatch(input, now);
        self.apply(action, now);
    }

    /// Fire due navigator timers
    pub fn on_timer(&mut self, now: Instant) {
        while let Some(action) = self.navigator.tick(now) {
            self.apply(action, now);
        }
    }

    /// Advance animations before drawing a frame
    pub fn on_frame(&mut self, now: Instant) {
        self.slide.update(now);
    }

    /// When the main loop should wake up without input
    pub fn next_wake(&self, now: Instant) -> Option<Instant> {
        let frame = self
            .slide
            .is_animating()
            .then(|| now + self.config.ui.animation_tick());

        [self.navigator.next_deadline(), frame]
            .into_iter()
            .flatten()
            .min()
    }

    fn apply(&mut self, action: NavAction, now: Instant) {
        match action {
            NavAction::Navigate(view) => {
                debug!(
                    index = view.index,
                    progress = view.progress_percent(),
                    "applying view update"
                );
                self.slide.slide_to(view.index, now);
                self.pending_title = Some(self.title_for(view.index));
            }
            NavAction::SetBuffer(indicator) => {
                debug!(progress = indicator.progress, direction = ?indicator.direction, "scroll buffer");
            }
            NavAction::ClearBuffer | NavAction::PassThrough | NavAction::NoOp => {}
        }
    }
}

fn max_scroll(state: &SectionState, viewport_height: u16) -> u16 {
    let total = state.lines.len().min(u16::MAX as usize) as u16;
    total.saturating_sub(viewport_height)
}
