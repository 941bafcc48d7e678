//! Boundary scroll buffer
//!
//! Accumulates wheel magnitude while the content region sits at an edge and
//! the gesture keeps one direction. Pure functions here compute the momentum
//! weighting and the trigger delay; the navigator owns the timers.

use std::time::{Duration, Instant};

use super::input::Direction;
use crate::config::NavigatorConfig;

/// Accumulated boundary scroll
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollBuffer {
    magnitude: f64,
    direction: Option<Direction>,
    last_event: Option<Instant>,
}

/// Outcome of feeding one delta into the buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulated {
    /// The buffer was discarded (reversal or timeout) before this delta
    pub reset: bool,
    /// Instantaneous speed, wheel units per millisecond
    pub momentum: f64,
}

impl ScrollBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn last_event(&self) -> Option<Instant> {
        self.last_event
    }

    pub fn is_empty(&self) -> bool {
        self.direction.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// When an idle buffer expires
    pub fn expires_at(&self, timeout: Duration) -> Option<Instant> {
        self.last_event.map(|t| t + timeout)
    }

    pub fn is_stale(&self, now: Instant, timeout: Duration) -> bool {
        self.last_event
            .is_some_and(|t| now.saturating_duration_since(t) > timeout)
    }

    /// Add one boundary wheel delta
    ///
    /// A direction reversal or an idle gap longer than the timeout resets the
    /// buffer first. The first delta of a gesture has no time derivative and
    /// contributes with zero momentum.
    pub fn accumulate(&mut self, delta: f64, now: Instant, config: &NavigatorConfig) -> Accumulated {
        let direction = Direction::from_delta(delta);
        let elapsed = self.last_event.map(|t| now.saturating_duration_since(t));

        let reversed = self.direction.is_some_and(|d| d != direction);
        let timed_out = elapsed.is_some_and(|e| e > config.buffer_timeout());
        let reset = reversed || timed_out;
        if reset {
            self.reset();
        }

        let magnitude = delta.abs();
        let momentum = match elapsed {
            Some(elapsed) if !reset => magnitude / (elapsed.as_secs_f64() * 1000.0).max(1.0),
            _ => 0.0,
        };

        // Velocity and momentum scaling compound
        self.magnitude +=
            magnitude * config.velocity_multiplier * momentum_multiplier(momentum, config);
        self.direction = Some(direction);
        self.last_event = Some(now);

        Accumulated { reset, momentum }
    }
}

/// Weight for a delta arriving at `momentum`, capped at the configured maximum
#[inline]
pub fn momentum_multiplier(momentum: f64, config: &NavigatorConfig) -> f64 {
    (1.0 + momentum / config.momentum_threshold).min(config.max_momentum_multiplier)
}

/// Delay between a full buffer and the navigation it triggers
///
/// Shrinks as momentum grows and never drops below `min_delay`.
pub fn navigation_delay(momentum: f64, config: &NavigatorConfig) -> Duration {
    let factor = 1.0 + momentum.max(0.0) / config.momentum_threshold;
    let nanos = (config.base_delay().as_nanos() as f64 / factor).round() as u64;
    Duration::from_nanos(nanos).max(config.min_delay())
}
