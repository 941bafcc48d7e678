//! Section navigator
//!
//! Maps a linear sequence of full-width sections onto one active index.
//! Discrete gestures (clicks, arrow keys, swipes) navigate immediately;
//! wheel deltas at a content boundary are debounced through a
//! [`ScrollBuffer`] and a single pending navigation timer.
//!
//! # Architecture
//!
//! ## Atoms
//! - `input` - gesture and action vocabulary
//! - `view` - view model derived from an index
//! - `buffer` - boundary scroll accumulation, momentum and delay math
//!
//! ## Molecule
//! - [`Navigator`] - owns the index, the buffer and every timer
//!
//! Every operation takes the current [`Instant`]. Timers are deadlines the
//! host waits on through [`Navigator::next_deadline`] before calling
//! [`Navigator::tick`]; nothing here sleeps or spawns.
//!
//! # Usage
//!
//! ```
//! use std::time::Instant;
//! use folio_core::navigator::{Direction, NavAction, NavInput, Navigator};
//! use folio_core::NavigatorConfig;
//!
//! let mut nav = Navigator::new(6, NavigatorConfig::default()).unwrap();
//! let action = nav.dispatch(NavInput::Key(Direction::Forward), Instant::now());
//! assert!(matches!(action, NavAction::Navigate(_)));
//! assert_eq!(nav.current(), 1);
//! ```

pub mod buffer;
pub mod input;
pub mod view;

use std::time::Instant;

use tracing::debug;

use crate::config::NavigatorConfig;

pub use buffer::{momentum_multiplier, navigation_delay, Accumulated, ScrollBuffer};
pub use input::{Direction, NavAction, NavInput, WheelTarget};
pub use view::{BufferIndicator, ViewUpdate};

/// A navigation scheduled by a full buffer
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingNavigation {
    due: Instant,
    direction: Direction,
}

/// Section navigation state machine
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigatorConfig,
    total: usize,
    current: usize,
    buffer: ScrollBuffer,
    /// At most one pending navigation; scheduling replaces it
    pending: Option<PendingNavigation>,
    /// Navigations are dropped until this instant
    cooldown_until: Option<Instant>,
    /// Wheel navigations are dropped while the slide transition runs
    navigating_until: Option<Instant>,
}

impl Navigator {
    /// Create a navigator over `total` sections, starting at the first
    pub fn new(total: usize, config: NavigatorConfig) -> crate::Result<Self> {
        Self::with_start(total, 0, config)
    }

    /// Create a navigator starting at `start`
    ///
    /// Fails when there are no sections or `start` is out of range, both of
    /// which indicate a broken page layout rather than bad input.
    pub fn with_start(total: usize, start: usize, config: NavigatorConfig) -> crate::Result<Self> {
        if total == 0 {
            return Err(crate::Error::Layout(
                "navigator needs at least one section".to_string(),
            ));
        }
        if start >= total {
            return Err(crate::Error::Layout(format!(
                "start section {} out of range (0..{})",
                start, total
            )));
        }
        config.validate()?;

        Ok(Self {
            config,
            total,
            current: start,
            buffer: ScrollBuffer::new(),
            pending: None,
            cooldown_until: None,
            navigating_until: None,
        })
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    /// View model for the current index
    pub fn view(&self) -> ViewUpdate {
        ViewUpdate::new(self.current, self.total)
    }

    /// Indicator for the current buffer, if any gesture is accumulating
    pub fn buffer_indicator(&self) -> Option<BufferIndicator> {
        self.buffer.direction().map(|direction| {
            BufferIndicator::new(
                self.buffer.magnitude(),
                self.config.buffer_threshold,
                direction,
            )
        })
    }

    pub fn is_cooling_down(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    pub fn is_navigating(&self, now: Instant) -> bool {
        self.navigating_until.is_some_and(|until| now < until)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Earliest instant at which [`Navigator::tick`] has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        let stale_at = if self.pending.is_none() {
            self.buffer.expires_at(self.config.buffer_timeout())
        } else {
            None
        };

        [
            self.pending.map(|p| p.due),
            self.cooldown_until,
            self.navigating_until,
            stale_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Route a gesture to its handler
    pub fn dispatch(&mut self, input: NavInput, now: Instant) -> NavAction {
        match input {
            NavInput::Click(index) => self.go_to_section(index, now).into(),
            NavInput::Key(direction) => self.handle_key(direction, now).into(),
            NavInput::Swipe(delta_x) => self.handle_swipe(delta_x, now).into(),
            NavInput::Wheel { delta_y, target } => self.handle_wheel(delta_y, target, now),
        }
    }

    /// Move to `target` unless cooling down, out of range, or already there
    pub fn go_to_section(&mut self, target: usize, now: Instant) -> Option<ViewUpdate> {
        if self.is_cooling_down(now) {
            debug!(to = target, current = self.current, "navigation dropped: cooldown active");
            return None;
        }
        if target >= self.total || target == self.current {
            return None;
        }

        self.cooldown_until = Some(now + self.config.cooldown());
        self.clear_buffer();

        debug!(from = self.current, to = target, "section changed");
        self.current = target;
        Some(self.view())
    }

    /// Left arrow goes back one section, right arrow forward one
    pub fn handle_key(&mut self, direction: Direction, now: Instant) -> Option<ViewUpdate> {
        self.step(direction, now)
    }

    /// Swipe of `delta_x = start_x - end_x`; positive moves forward
    pub fn handle_swipe(&mut self, delta_x: f64, now: Instant) -> Option<ViewUpdate> {
        if !(delta_x.abs() > self.config.swipe_threshold) {
            return None;
        }
        self.step(Direction::from_delta(delta_x), now)
    }

    /// Filter, intercept or buffer a vertical wheel delta
    pub fn handle_wheel(&mut self, delta_y: f64, target: WheelTarget, now: Instant) -> NavAction {
        if !(delta_y.abs() >= self.config.min_wheel_delta) {
            return NavAction::PassThrough;
        }
        let direction = Direction::from_delta(delta_y);

        match target {
            WheelTarget::Content { at_top, at_bottom } => {
                let at_boundary = match direction {
                    Direction::Backward => at_top,
                    Direction::Forward => at_bottom,
                };
                if !at_boundary {
                    // Scrolling content, not sections
                    self.clear_buffer();
                    return NavAction::PassThrough;
                }
                if self.is_navigating(now) {
                    return NavAction::NoOp;
                }
                self.accumulate(delta_y, direction, now)
            }
            WheelTarget::Outside => {
                if delta_y.abs() < self.config.direct_wheel_delta {
                    return NavAction::PassThrough;
                }
                if self.is_navigating(now) {
                    return NavAction::NoOp;
                }
                self.wheel_navigate(direction, now).into()
            }
        }
    }

    /// Fire due timers and expire flags
    pub fn tick(&mut self, now: Instant) -> Option<NavAction> {
        if self.cooldown_until.is_some_and(|until| now >= until) {
            self.cooldown_until = None;
        }
        if self.navigating_until.is_some_and(|until| now >= until) {
            self.navigating_until = None;
        }

        if let Some(pending) = self.pending {
            if now < pending.due {
                return None;
            }
            self.pending = None;
            self.buffer.reset();

            return Some(match self.wheel_navigate(pending.direction, now) {
                Some(view) => NavAction::Navigate(view),
                None => NavAction::ClearBuffer,
            });
        }

        if self.buffer.is_stale(now, self.config.buffer_timeout()) {
            debug!(magnitude = self.buffer.magnitude(), "scroll buffer expired");
            self.buffer.reset();
            return Some(NavAction::ClearBuffer);
        }

        None
    }

    /// Feed a boundary delta into the buffer and (re)schedule when full
    fn accumulate(&mut self, delta_y: f64, direction: Direction, now: Instant) -> NavAction {
        let acc = self.buffer.accumulate(delta_y, now, &self.config);
        if acc.reset {
            self.pending = None;
        }

        let indicator = BufferIndicator::new(
            self.buffer.magnitude(),
            self.config.buffer_threshold,
            direction,
        );

        if self.buffer.magnitude() >= self.config.buffer_threshold {
            let delay = navigation_delay(acc.momentum, &self.config);
            debug!(
                ?direction,
                momentum = acc.momentum,
                delay_ms = delay.as_millis() as u64,
                "buffer full, navigation scheduled"
            );
            self.pending = Some(PendingNavigation {
                due: now + delay,
                direction,
            });
        }

        NavAction::SetBuffer(indicator)
    }

    /// Navigate one step and hold off further wheel input for the transition
    fn wheel_navigate(&mut self, direction: Direction, now: Instant) -> Option<ViewUpdate> {
        let view = self.step(direction, now)?;
        self.navigating_until = Some(now + self.config.transition());
        Some(view)
    }

    fn step(&mut self, direction: Direction, now: Instant) -> Option<ViewUpdate> {
        let target = self.current.checked_add_signed(direction.sign())?;
        self.go_to_section(target, now)
    }

    fn clear_buffer(&mut self) {
        self.buffer.reset();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn navigator() -> Navigator {
        Navigator::new(6, NavigatorConfig::default()).unwrap()
    }

    fn bottom() -> WheelTarget {
        WheelTarget::Content {
            at_top: false,
            at_bottom: true,
        }
    }

    fn wheel(delta_y: f64, target: WheelTarget) -> NavInput {
        NavInput::Wheel { delta_y, target }
    }

    /// Run ticks every 10ms over `span` and count navigations
    fn tick_through(nav: &mut Navigator, from: Instant, span: Duration) -> usize {
        let mut navigations = 0;
        let mut t = from;
        while t <= from + span {
            if let Some(NavAction::Navigate(_)) = nav.tick(t) {
                navigations += 1;
            }
            t += ms(10);
        }
        navigations
    }

    #[test]
    fn test_no_sections_is_layout_error() {
        let err = Navigator::new(0, NavigatorConfig::default()).unwrap_err();
        assert!(matches!(err, crate::Error::Layout(_)));
    }

    #[test]
    fn test_start_out_of_range() {
        assert!(Navigator::with_start(3, 3, NavigatorConfig::default()).is_err());
        assert_eq!(
            Navigator::with_start(3, 2, NavigatorConfig::default())
                .unwrap()
                .current(),
            2
        );
    }

    #[test]
    fn test_out_of_range_target_is_noop() {
        let mut nav = navigator();
        let t0 = Instant::now();
        for target in [6, 7, 100, usize::MAX] {
            assert!(nav.go_to_section(target, t0).is_none());
            assert_eq!(nav.current(), 0);
        }
        assert!(!nav.is_cooling_down(t0));
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut nav = navigator();
        let t0 = Instant::now();
        assert!(nav.go_to_section(0, t0).is_none());
        assert!(!nav.is_cooling_down(t0));
    }

    #[test]
    fn test_second_call_within_cooldown_dropped() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert!(nav.go_to_section(1, t0).is_some());
        assert!(nav.go_to_section(2, t0 + ms(100)).is_none());
        assert_eq!(nav.current(), 1);

        // Cooldown is over exactly at 800ms
        assert!(nav.go_to_section(2, t0 + ms(800)).is_some());
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_cooldown_clears_on_tick() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.go_to_section(3, t0);
        assert_eq!(nav.next_deadline(), Some(t0 + ms(800)));

        assert_eq!(nav.tick(t0 + ms(800)), None);
        assert!(!nav.is_cooling_down(t0 + ms(800)));
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_progress_first_and_last() {
        let mut nav = navigator();
        assert_eq!(nav.view().progress_percent(), 0.0);

        let view = nav.go_to_section(5, Instant::now()).unwrap();
        assert_eq!(view.progress_percent(), 100.0);
        assert_eq!(view.index, 5);
    }

    #[test]
    fn test_keys_step_by_one() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert!(nav.handle_key(Direction::Backward, t0).is_none());
        assert_eq!(nav.current(), 0);

        assert!(nav.handle_key(Direction::Forward, t0).is_some());
        assert_eq!(nav.current(), 1);

        assert!(nav.handle_key(Direction::Backward, t0 + ms(900)).is_some());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_last_section_forward_key_is_noop() {
        let mut nav = Navigator::with_start(6, 5, NavigatorConfig::default()).unwrap();
        assert!(nav.handle_key(Direction::Forward, Instant::now()).is_none());
        assert_eq!(nav.current(), 5);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert!(nav.handle_swipe(40.0, t0).is_none());
        assert_eq!(nav.current(), 0);

        let view = nav.handle_swipe(60.0, t0).unwrap();
        assert_eq!(view.index, 1);

        assert!(nav.handle_swipe(-60.0, t0 + ms(900)).is_some());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_click_dispatch() {
        let mut nav = navigator();
        let action = nav.dispatch(NavInput::Click(4), Instant::now());
        assert_eq!(action.view().map(|v| v.index), Some(4));
        assert_eq!(nav.dispatch(NavInput::Click(9), Instant::now()), NavAction::NoOp);
    }

    #[test]
    fn test_small_wheel_delta_ignored_everywhere() {
        let mut nav = navigator();
        let t0 = Instant::now();
        for target in [bottom(), WheelTarget::FITS, WheelTarget::Outside] {
            for delta in [30.0, -30.0] {
                assert_eq!(nav.dispatch(wheel(delta, target), t0), NavAction::PassThrough);
                assert!(nav.buffer().is_empty());
                assert_eq!(nav.current(), 0);
            }
        }
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn test_wheel_inside_content_passes_through() {
        let mut nav = navigator();
        let t0 = Instant::now();

        nav.dispatch(wheel(100.0, bottom()), t0);
        assert!(!nav.buffer().is_empty());

        // Content scrolled away from the bottom: native scroll, buffer cleared
        let middle = WheelTarget::Content {
            at_top: false,
            at_bottom: false,
        };
        assert_eq!(nav.dispatch(wheel(100.0, middle), t0 + ms(20)), NavAction::PassThrough);
        assert!(nav.buffer().is_empty());

        // Scrolling up while at the bottom is not a boundary scroll either
        assert_eq!(nav.dispatch(wheel(-100.0, bottom()), t0 + ms(40)), NavAction::PassThrough);
        assert!(nav.buffer().is_empty());
    }

    #[test]
    fn test_boundary_wheel_sequence_navigates_once() {
        let mut nav = navigator();
        let t0 = Instant::now();

        for i in 0..4 {
            let action = nav.dispatch(wheel(100.0, bottom()), t0 + ms(30 * i));
            assert!(matches!(action, NavAction::SetBuffer(_)));
        }
        assert!(nav.has_pending());
        assert!(nav.buffer_indicator().unwrap().is_full());
        assert_eq!(nav.current(), 0);

        assert_eq!(tick_through(&mut nav, t0 + ms(90), ms(1000)), 1);
        assert_eq!(nav.current(), 1);
        assert!(nav.buffer().is_empty());
        assert!(!nav.has_pending());
    }

    #[test]
    fn test_threshold_not_reached_never_navigates() {
        let mut nav = navigator();
        let t0 = Instant::now();

        nav.dispatch(wheel(100.0, bottom()), t0);
        nav.dispatch(wheel(100.0, bottom()), t0 + ms(30));
        assert!(!nav.has_pending());

        assert_eq!(tick_through(&mut nav, t0 + ms(30), ms(1000)), 0);
        assert_eq!(nav.current(), 0);
        assert!(nav.buffer().is_empty());
    }

    #[test]
    fn test_reversal_discards_previous_accumulation() {
        let mut nav = Navigator::with_start(6, 2, NavigatorConfig::default()).unwrap();
        let t0 = Instant::now();
        let both = WheelTarget::FITS;

        // 60 + 120 forward
        nav.dispatch(wheel(100.0, both), t0);
        nav.dispatch(wheel(100.0, both), t0 + ms(30));
        // reversal restarts at 60, then 120 more
        nav.dispatch(wheel(-100.0, both), t0 + ms(60));
        nav.dispatch(wheel(-100.0, both), t0 + ms(90));

        assert!(!nav.has_pending());
        let indicator = nav.buffer_indicator().unwrap();
        assert_eq!(indicator.direction, Direction::Backward);
        assert!((nav.buffer().magnitude() - 180.0).abs() < 1e-9);

        // Two more backward deltas fill it
        nav.dispatch(wheel(-100.0, both), t0 + ms(120));
        nav.dispatch(wheel(-100.0, both), t0 + ms(150));
        assert!(nav.has_pending());
        assert_eq!(tick_through(&mut nav, t0 + ms(150), ms(500)), 1);
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_each_event_reschedules_single_timer() {
        let mut nav = navigator();
        let t0 = Instant::now();

        for i in 0..4 {
            nav.dispatch(wheel(100.0, bottom()), t0 + ms(30 * i));
        }
        let first_due = nav.next_deadline().unwrap();

        nav.dispatch(wheel(100.0, bottom()), t0 + ms(120));
        let second_due = nav.next_deadline().unwrap();
        assert!(second_due > first_due);

        // The original deadline no longer fires
        assert_eq!(nav.tick(first_due), None);
        assert_eq!(nav.current(), 0);

        assert!(matches!(nav.tick(second_due), Some(NavAction::Navigate(_))));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn test_slow_gesture_waits_longer() {
        let config = NavigatorConfig {
            buffer_threshold: 60.0,
            ..Default::default()
        };
        let mut nav = Navigator::new(6, config).unwrap();
        let t0 = Instant::now();

        // First delta has no momentum: full base delay
        nav.dispatch(wheel(100.0, bottom()), t0);
        assert_eq!(nav.next_deadline(), Some(t0 + ms(150)));
        assert_eq!(nav.tick(t0 + ms(149)), None);
        assert!(matches!(nav.tick(t0 + ms(150)), Some(NavAction::Navigate(_))));
    }

    #[test]
    fn test_stale_buffer_expires() {
        let mut nav = navigator();
        let t0 = Instant::now();

        nav.dispatch(wheel(100.0, bottom()), t0);
        assert_eq!(nav.next_deadline(), Some(t0 + ms(400)));

        assert_eq!(nav.tick(t0 + ms(400)), None);
        assert_eq!(nav.tick(t0 + ms(401)), Some(NavAction::ClearBuffer));
        assert!(nav.buffer_indicator().is_none());
    }

    #[test]
    fn test_wheel_outside_content_navigates_directly() {
        let mut nav = navigator();
        let t0 = Instant::now();

        assert_eq!(
            nav.dispatch(wheel(80.0, WheelTarget::Outside), t0),
            NavAction::PassThrough
        );
        assert_eq!(nav.current(), 0);

        let action = nav.dispatch(wheel(120.0, WheelTarget::Outside), t0);
        assert_eq!(action.view().map(|v| v.index), Some(1));
        assert!(nav.buffer().is_empty());
        assert!(nav.is_navigating(t0 + ms(599)));
        assert!(!nav.is_navigating(t0 + ms(600)));
    }

    #[test]
    fn test_wheel_dropped_while_navigating() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.dispatch(wheel(120.0, WheelTarget::Outside), t0);

        let action = nav.dispatch(wheel(100.0, bottom()), t0 + ms(300));
        assert_eq!(action, NavAction::NoOp);
        assert!(nav.buffer().is_empty());

        // Transition over but cooldown still active: dropped, not queued
        nav.tick(t0 + ms(650));
        let action = nav.dispatch(wheel(120.0, WheelTarget::Outside), t0 + ms(650));
        assert_eq!(action, NavAction::NoOp);
        assert_eq!(nav.current(), 1);

        nav.tick(t0 + ms(900));
        assert!(nav.dispatch(wheel(120.0, WheelTarget::Outside), t0 + ms(900)).view().is_some());
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_discrete_navigation_cancels_pending() {
        let mut nav = navigator();
        let t0 = Instant::now();
        for i in 0..4 {
            nav.dispatch(wheel(100.0, bottom()), t0 + ms(30 * i));
        }
        assert!(nav.has_pending());

        nav.dispatch(NavInput::Click(3), t0 + ms(100));
        assert!(!nav.has_pending());
        assert!(nav.buffer().is_empty());

        assert_eq!(tick_through(&mut nav, t0 + ms(100), ms(1000)), 0);
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn test_pending_at_last_section_clears_buffer() {
        let config = NavigatorConfig {
            buffer_threshold: 60.0,
            ..Default::default()
        };
        let mut nav = Navigator::with_start(6, 5, config).unwrap();
        let t0 = Instant::now();

        nav.dispatch(wheel(100.0, bottom()), t0);
        assert_eq!(nav.tick(t0 + ms(150)), Some(NavAction::ClearBuffer));
        assert_eq!(nav.current(), 5);
        assert!(nav.buffer().is_empty());
    }
}
