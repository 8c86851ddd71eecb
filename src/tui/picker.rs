//! Single-column picker wheel state.

/// Selected row of a picker whose rows are supplied by its owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerState {
    /// Currently selected row
    pub selected: usize,
}

impl PickerState {
    /// Creates a picker positioned on the first row
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Move selection up, wrapping to the last row
    pub const fn select_previous(&mut self, row_count: usize) {
        if row_count > 0 {
            if self.selected > 0 && self.selected < row_count {
                self.selected -= 1;
            } else {
                self.selected = row_count - 1;
            }
        }
    }

    /// Move selection down, wrapping to the first row
    pub const fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected = (self.selected + 1) % row_count;
        }
    }

    /// Pull the selection back into range after the row count shrank
    pub fn clamp(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut picker = PickerState::new();
        let rows = 3;

        picker.select_next(rows);
        assert_eq!(picker.selected, 1);

        picker.select_next(rows);
        assert_eq!(picker.selected, 2);

        // Wrap around
        picker.select_next(rows);
        assert_eq!(picker.selected, 0);

        picker.select_previous(rows);
        assert_eq!(picker.selected, 2);
    }

    #[test]
    fn test_empty_picker_stays_put() {
        let mut picker = PickerState::new();
        picker.select_next(0);
        picker.select_previous(0);
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn test_clamp() {
        let mut picker = PickerState { selected: 12 };
        picker.clamp(1);
        assert_eq!(picker.selected, 0);

        let mut picker = PickerState { selected: 2 };
        picker.clamp(13);
        assert_eq!(picker.selected, 2);
    }
}
