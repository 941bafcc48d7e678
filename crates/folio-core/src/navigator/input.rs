//! Input and output vocabulary of the navigator

use super::view::{BufferIndicator, ViewUpdate};

/// Direction along the section strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0 (wheel up, key left, finger moving left to right)
    Backward,
    /// Towards the last section
    Forward,
}

impl Direction {
    /// Direction of a signed delta; zero counts as forward
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    #[inline]
    pub fn sign(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Where a wheel event landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelTarget {
    /// Inside a scrollable content region, with its current scroll position
    Content { at_top: bool, at_bottom: bool },
    /// Anywhere outside a content region
    Outside,
}

impl WheelTarget {
    /// Content region that fits entirely in view
    pub const FITS: WheelTarget = WheelTarget::Content {
        at_top: true,
        at_bottom: true,
    };
}

/// A gesture the navigator understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavInput {
    /// Click on a nav link or dot bound to a section index
    Click(usize),
    /// Left or right arrow
    Key(Direction),
    /// Horizontal swipe, `start_x - end_x`
    Swipe(f64),
    /// Vertical wheel delta, positive when scrolling down
    Wheel { delta_y: f64, target: WheelTarget },
}

/// What the host should do after an input or a timer
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// The index changed; apply the view update
    Navigate(ViewUpdate),
    /// The boundary buffer grew; show its indicator
    SetBuffer(BufferIndicator),
    /// The buffer was discarded; hide the indicator
    ClearBuffer,
    /// Not consumed, let the content scroll natively
    PassThrough,
    /// Consumed without effect
    NoOp,
}

impl NavAction {
    pub fn view(&self) -> Option<&ViewUpdate> {
        match self {
            NavAction::Navigate(view) => Some(view),
            _ => None,
        }
    }
}

impl From<Option<ViewUpdate>> for NavAction {
    fn from(view: Option<ViewUpdate>) -> Self {
        view.map(NavAction::Navigate).unwrap_or(NavAction::NoOp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(-3.0), Direction::Backward);
        assert_eq!(Direction::from_delta(120.0), Direction::Forward);
        assert_eq!(Direction::Backward.sign(), -1);
    }
}
