//! Layout grid and status-line composition for the shell.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::view::Page;

/// Panel rectangles for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    /// Navigation bar (top).
    pub nav: Rect,
    /// Page body.
    pub body: Rect,
    /// Key-hint status line (bottom).
    pub status: Rect,
}

const NAV_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Compute the frame grid: bordered nav bar, flexible body, status line.
///
/// On terminals too short for the nav border the body simply collapses to
/// zero height; the split never panics or overlaps.
pub fn compute_layout(frame_area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame_area);

    AppLayout {
        nav: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Compose the status line, dropping hints from the right on narrow terminals.
pub fn compose_status_text(width: u16, page: Page, selected_category: &str, visible: usize) -> String {
    let width = width as usize;

    let base = "q quit | Tab menu";
    let page_part = match page {
        Page::Home => " | t tools".to_string(),
        Page::Tools => format!(" | {selected_category}: {visible} shown"),
    };
    let keys_part = match page {
        Page::Home => String::new(),
        Page::Tools => " | \u{2190}/\u{2192} filter | \u{2191}/\u{2193} cards | Enter expand".to_string(),
    };

    let full = format!("{base}{page_part}{keys_part}");
    if full.chars().count() <= width {
        return full;
    }

    let short = format!("{base}{page_part}");
    if short.chars().count() <= width {
        return short;
    }

    base.chars().take(width).collect()
}

/// True when scrolled content remains above the viewport.
pub fn can_scroll_up(scroll_offset: usize) -> bool {
    scroll_offset > 0
}

/// True when content remains below the viewport.
pub fn can_scroll_down(total_lines: usize, visible_lines: usize, scroll_offset: usize) -> bool {
    scroll_offset + visible_lines < total_lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_frame() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.nav.height, NAV_HEIGHT);
        assert_eq!(layout.status.height, STATUS_HEIGHT);
        assert_eq!(
            layout.nav.height + layout.body.height + layout.status.height,
            24
        );
    }

    #[test]
    fn test_layout_degrades_on_tiny_terminal() {
        // Must not panic; body may collapse to nothing.
        let layout = compute_layout(Rect::new(0, 0, 20, 3));
        assert_eq!(layout.body.height, 0);
    }

    #[test]
    fn test_status_text_full_width() {
        let text = compose_status_text(100, Page::Tools, "Backend", 2);
        assert!(text.contains("q quit"));
        assert!(text.contains("Backend: 2 shown"));
        assert!(text.contains("Enter expand"));
        assert!(text.chars().count() <= 100);
    }

    #[test]
    fn test_status_text_drops_key_hints_when_narrow() {
        let text = compose_status_text(40, Page::Tools, "Backend", 2);
        assert!(text.contains("Backend"));
        assert!(!text.contains("Enter expand"));
        assert!(text.chars().count() <= 40);
    }

    #[test]
    fn test_status_text_minimal() {
        let text = compose_status_text(10, Page::Home, "All", 6);
        assert!(text.chars().count() <= 10);
    }

    #[test]
    fn test_scroll_indicators() {
        assert!(!can_scroll_up(0));
        assert!(can_scroll_up(1));
        assert!(can_scroll_down(30, 10, 0));
        assert!(!can_scroll_down(30, 10, 20));
    }
}
