//! View model derived from the current section index

use super::input::Direction;

/// How the view reflects a section index
///
/// The host applies this after every successful index change: translate
/// the strip, set the progress indicator, and mark exactly one panel, dot
/// and nav link active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewUpdate {
    pub index: usize,
    pub total: usize,
}

impl ViewUpdate {
    pub fn new(index: usize, total: usize) -> Self {
        debug_assert!(index < total.max(1));
        Self { index, total }
    }

    /// Strip translation in full-viewport units (each section is one viewport wide)
    pub fn viewport_offset(&self) -> f64 {
        -(self.index as f64)
    }

    /// Strip translation as a percentage of the whole strip's width
    pub fn strip_offset_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        -(self.index as f64) * (100.0 / self.total as f64)
    }

    /// Progress through the sections in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.total <= 1 {
            0.0
        } else {
            self.index as f64 / (self.total - 1) as f64
        }
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress() * 100.0
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.index
    }

    /// Active flag for every marker, in section order
    pub fn markers(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(move |i| self.is_active(i))
    }
}

/// Fill state of the boundary scroll buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferIndicator {
    /// `min(buffer / threshold, 1)`
    pub progress: f64,
    pub direction: Direction,
}

impl BufferIndicator {
    pub fn new(magnitude: f64, threshold: f64, direction: Direction) -> Self {
        Self {
            progress: (magnitude / threshold).clamp(0.0, 1.0),
            direction,
        }
    }

    /// Backward scrolling fills at the top edge of the content
    pub fn at_top(&self) -> bool {
        self.direction == Direction::Backward
    }

    pub fn is_full(&self) -> bool {
        self.progress >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(ViewUpdate::new(0, 6).progress_percent(), 0.0);
        assert_eq!(ViewUpdate::new(5, 6).progress_percent(), 100.0);
        assert_eq!(ViewUpdate::new(0, 1).progress(), 0.0);
    }

    #[test]
    fn test_offsets() {
        let view = ViewUpdate::new(2, 4);
        assert_eq!(view.viewport_offset(), -2.0);
        assert_eq!(view.strip_offset_percent(), -50.0);
    }

    #[test]
    fn test_exactly_one_marker_active() {
        let view = ViewUpdate::new(3, 6);
        let markers: Vec<bool> = view.markers().collect();
        assert_eq!(markers.len(), 6);
        assert_eq!(markers.iter().filter(|m| **m).count(), 1);
        assert!(markers[3]);
    }

    #[test]
    fn test_indicator_is_capped() {
        let indicator = BufferIndicator::new(450.0, 300.0, Direction::Forward);
        assert_eq!(indicator.progress, 1.0);
        assert!(indicator.is_full());
        assert!(!indicator.at_top());

        let half = BufferIndicator::new(150.0, 300.0, Direction::Backward);
        assert_eq!(half.progress, 0.5);
        assert!(half.at_top());
    }
}
