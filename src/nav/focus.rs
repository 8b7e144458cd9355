//! Focus bookkeeping for the suggestion rows

/// Which suggestion row, if any, has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    index: Option<usize>,
}

impl FocusState {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Move to the next row, wrapping from the last row to the first
    ///
    /// With nothing focused the first row gets focus. Does nothing when there
    /// are no rows.
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.index = match self.index {
            Some(current) if current + 1 < count => Some(current + 1),
            _ => Some(0),
        };
    }

    /// Move to the previous row, wrapping from the first row to the last
    ///
    /// With nothing focused the last row gets focus.
    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.index = match self.index {
            Some(current) if current > 0 && current < count => Some(current - 1),
            _ => Some(count - 1),
        };
    }
}

#[cfg(test)]
#[path = "focus_tests.rs"]
mod focus_tests;
