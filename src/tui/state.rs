//! Central TUI state - everything rendered on screen comes from this.

use crate::catalog::{Tool, all_tools};
use crate::view::{ExpandedCard, MenuState, Page, category_strip, filter_by_category, partition_featured};

/// Per-mount presentation state for the whole interface.
///
/// Owned by the event loop, mutated only by key events, discarded on exit.
/// Switching pages discards the Tools page state, matching a page shell
/// that is unmounted and remounted on navigation.
#[derive(Debug, Clone)]
pub struct TuiState {
    /// Page currently shown.
    pub page: Page,

    /// Collapsible navigation menu.
    pub menu: MenuState,

    /// Index into the category strip (0 is the "All" sentinel).
    pub category_index: usize,

    /// Card cursor position within the visible (filtered) list.
    pub cursor: usize,

    /// Which card shows its long description. Deliberately not cleared by
    /// filter changes: a card hidden by the filter comes back expanded.
    pub expanded: ExpandedCard,

    /// Scroll offset for the page body.
    pub scroll_offset: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            menu: MenuState::default(),
            category_index: 0,
            cursor: 0,
            expanded: ExpandedCard::default(),
            scroll_offset: 0,
        }
    }
}

impl TuiState {
    /// Currently selected filter label.
    pub fn selected_category(&self) -> &'static str {
        category_strip()[self.category_index]
    }

    /// Visible cards in display order: featured section, then the rest.
    pub fn visible_tools(&self) -> Vec<&'static Tool> {
        let filtered = filter_by_category(all_tools(), self.selected_category());
        let (featured, other) = partition_featured(&filtered);
        featured.into_iter().chain(other).collect()
    }

    /// Activate a navigation link: closes the menu, and on an actual page
    /// change remounts the target page with fresh presentation state.
    pub fn activate_link(&mut self, page: Page) {
        self.menu.link_activated();
        if self.page != page {
            self.page = page;
            self.category_index = 0;
            self.cursor = 0;
            self.expanded = ExpandedCard::default();
            self.scroll_offset = 0;
        }
    }

    /// Select the next category on the strip, wrapping past the end.
    pub fn next_category(&mut self) {
        if self.page != Page::Tools {
            return;
        }
        self.category_index = (self.category_index + 1) % category_strip().len();
        self.clamp_cursor();
    }

    /// Select the previous category on the strip, wrapping before "All".
    pub fn prev_category(&mut self) {
        if self.page != Page::Tools {
            return;
        }
        let len = category_strip().len();
        self.category_index = (self.category_index + len - 1) % len;
        self.clamp_cursor();
    }

    pub fn cursor_up(&mut self) {
        if self.page == Page::Tools {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn cursor_down(&mut self) {
        if self.page != Page::Tools {
            return;
        }
        let len = self.visible_tools().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Toggle expansion of the card under the cursor.
    pub fn toggle_focused(&mut self) {
        if self.page != Page::Tools {
            return;
        }
        if let Some(tool) = self.visible_tools().get(self.cursor) {
            self.expanded.toggle(tool.id);
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Keep the cursor inside the visible list after a filter change.
    fn clamp_cursor(&mut self) {
        let len = self.visible_tools().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_tools() -> TuiState {
        let mut state = TuiState::default();
        state.activate_link(Page::Tools);
        state
    }

    fn select_category(state: &mut TuiState, label: &str) {
        while state.selected_category() != label {
            state.next_category();
        }
    }

    #[test]
    fn test_starts_on_home_with_menu_closed() {
        let state = TuiState::default();
        assert_eq!(state.page, Page::Home);
        assert!(!state.menu.is_open());
        assert_eq!(state.selected_category(), "All");
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut state = on_tools();
        state.prev_category();
        assert_eq!(state.selected_category(), "DevOps");
        state.next_category();
        assert_eq!(state.selected_category(), "All");
    }

    #[test]
    fn test_visible_tools_featured_first() {
        let state = on_tools();
        let ids: Vec<_> = state.visible_tools().iter().map(|t| t.id).collect();
        assert_eq!(ids, ["1", "2", "6", "3", "4", "5"]);
    }

    #[test]
    fn test_cursor_clamps_after_filter_change() {
        let mut state = on_tools();
        for _ in 0..5 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 5);

        select_category(&mut state, "Backend");
        assert!(state.cursor < state.visible_tools().len());

        select_category(&mut state, "All");
        state.cursor_up();
        assert_eq!(state.cursor, 0);
        state.cursor_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_expansion_survives_filter_change() {
        let mut state = on_tools();
        // Focus id "2" (second visible card) and expand it.
        state.cursor_down();
        state.toggle_focused();
        assert!(state.expanded.is_expanded("2"));

        // "Web App" excludes id "2"; the state is deliberately kept.
        select_category(&mut state, "Web App");
        assert!(state.visible_tools().iter().all(|t| t.id != "2"));
        assert!(state.expanded.is_expanded("2"));

        // Back on a filter that shows it, the card is still expanded.
        select_category(&mut state, "Backend");
        assert!(state.expanded.is_expanded("2"));
    }

    #[test]
    fn test_toggle_replaces_previous_expansion() {
        let mut state = on_tools();
        state.toggle_focused(); // id "1"
        state.cursor_down();
        state.cursor_down();
        state.toggle_focused(); // id "6"
        assert!(state.expanded.is_expanded("6"));
        assert!(!state.expanded.is_expanded("1"));
    }

    #[test]
    fn test_page_switch_remounts_tools_state() {
        let mut state = on_tools();
        select_category(&mut state, "Backend");
        state.toggle_focused();
        assert!(state.expanded.current().is_some());

        state.activate_link(Page::Home);
        state.activate_link(Page::Tools);
        assert_eq!(state.selected_category(), "All");
        assert_eq!(state.cursor, 0);
        assert_eq!(state.expanded.current(), None);
    }

    #[test]
    fn test_link_to_current_page_keeps_state() {
        let mut state = on_tools();
        select_category(&mut state, "Library");
        state.menu.press();

        state.activate_link(Page::Tools);
        assert!(!state.menu.is_open());
        assert_eq!(state.selected_category(), "Library");
    }

    #[test]
    fn test_home_page_ignores_catalog_keys() {
        let mut state = TuiState::default();
        state.next_category();
        state.cursor_down();
        state.toggle_focused();
        assert_eq!(state.selected_category(), "All");
        assert_eq!(state.cursor, 0);
        assert_eq!(state.expanded.current(), None);
    }
}
