//! Touch-style gesture tracking on top of mouse press and release
//!
//! Only the endpoints matter, so drag events in between are not tracked.

/// A completed pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Released where it was pressed
    Tap { column: u16, row: u16 },
    /// Horizontal travel, `start_column - end_column`
    ///
    /// Positive when the pointer moved right to left.
    Swipe { delta_columns: i32 },
}

/// Tracks one press-drag-release sequence at a time
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer pressed (touchstart)
    pub fn start(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Pointer released (touchend)
    pub fn finish(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let (start_column, start_row) = self.start.take()?;

        let delta_columns = start_column as i32 - column as i32;
        if delta_columns == 0 && start_row == row {
            Some(Gesture::Tap { column, row })
        } else {
            Some(Gesture::Swipe { delta_columns })
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
