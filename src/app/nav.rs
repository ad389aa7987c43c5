//! Cursor over the visible rows of the tree pane.

/// Holds the index of the selected row. Row counts are passed in by the caller, since the
/// visible rows change whenever a node is folded or unfolded.
#[derive(Debug, Default)]
pub struct NavState {
    selected: usize,
}

impl NavState {
    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    /// Moves the selection up by one row, wrapping around.
    /// Returns `false` if there are no rows.
    pub fn move_up(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        if self.selected == 0 {
            self.selected = len - 1;
        } else {
            self.selected -= 1;
        }
        true
    }

    /// Moves the selection down by one row, wrapping around.
    /// Returns `false` if there are no rows.
    pub fn move_down(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % len;
        true
    }

    pub fn go_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn go_to_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn select(&mut self, idx: usize, len: usize) {
        self.selected = idx.min(len.saturating_sub(1));
    }

    /// Keeps the selection inside `len` rows after the row list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
