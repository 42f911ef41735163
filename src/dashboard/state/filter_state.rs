//! Filter and cursor state for the company listing.
//!
//! This module pairs the active [`FilterCriteria`] with the user's position
//! within the filtered list. The design ensures that cursor position is
//! retained when criteria change (clamped to the valid range).

use super::criteria::FilterCriteria;

/// State managing the active criteria and cursor position.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Currently active filter criteria.
    pub criteria: FilterCriteria,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Scroll offset for virtual scrolling (rows scrolled from top).
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a new filter state with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn cursor_down(&mut self, max_index: usize) {
        if self.cursor_position < max_index {
            self.cursor_position = self.cursor_position.saturating_add(1);
        }
    }

    /// Moves the cursor up by a page (visible height).
    pub const fn page_up(&mut self, page_size: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(page_size);
    }

    /// Moves the cursor down by a page (visible height).
    pub const fn page_down(&mut self, page_size: usize, max_index: usize) {
        let new_pos = self.cursor_position.saturating_add(page_size);
        self.cursor_position = if new_pos < max_index {
            new_pos
        } else {
            max_index
        };
    }

    /// Moves the cursor to the first item.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.cursor_position = max_index;
    }
}
