// Integration tests driving the catalog and view-state model end to end,
// the way the TUI and the CLI subcommands consume them.

use folio::catalog::{all_tools, tool_by_id};
use folio::tui::TuiState;
use folio::view::{
    ALL_CATEGORIES, ExpandedCard, MenuState, Page, filter_by_category, partition_featured,
};

#[test]
fn filter_then_partition_matches_the_rendered_sections() {
    let filtered = filter_by_category(all_tools(), "Backend");
    let ids: Vec<_> = filtered.iter().map(|t| t.id).collect();
    assert_eq!(ids, ["2", "6"]);

    let (featured, other) = partition_featured(&filtered);
    let featured_ids: Vec<_> = featured.iter().map(|t| t.id).collect();
    assert_eq!(featured_ids, ["2", "6"]);
    assert!(other.is_empty());
}

#[test]
fn all_sentinel_is_the_identity_filter() {
    let filtered = filter_by_category(all_tools(), ALL_CATEGORIES);
    assert_eq!(filtered.len(), all_tools().len());
    for (filtered_tool, catalog_tool) in filtered.iter().zip(all_tools()) {
        assert_eq!(filtered_tool.id, catalog_tool.id);
    }
}

#[test]
fn double_toggle_is_the_identity() {
    let mut expanded = ExpandedCard::default();
    expanded.toggle("4");
    let before = expanded.clone();

    expanded.toggle("5");
    expanded.toggle("5");
    assert_eq!(expanded, before);
}

#[test]
fn expansion_survives_a_filter_round_trip() {
    // Expand id "2", hide it behind the "Web App" filter, come back:
    // the card must still report expanded.
    let mut state = TuiState::default();
    state.activate_link(Page::Tools);

    state.cursor_down(); // focus id "2"
    state.toggle_focused();
    assert!(state.expanded.is_expanded("2"));

    while state.selected_category() != "Web App" {
        state.next_category();
    }
    assert!(state.visible_tools().iter().all(|t| t.id != "2"));

    while state.selected_category() != "Backend" {
        state.next_category();
    }
    assert!(state.visible_tools().iter().any(|t| t.id == "2"));
    assert!(state.expanded.is_expanded("2"));
}

#[test]
fn expanding_a_card_collapses_the_previous_one() {
    let mut expanded = ExpandedCard::default();
    expanded.toggle("1");
    expanded.toggle("3");
    assert!(expanded.is_expanded("3"));
    assert!(!expanded.is_expanded("1"));
}

#[test]
fn menu_state_machine() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());

    menu.press();
    assert!(menu.is_open());

    menu.press();
    assert!(!menu.is_open());

    menu.press();
    menu.link_activated();
    assert!(!menu.is_open());
}

#[test]
fn catalog_lookup_agrees_with_filtering() {
    for tool in filter_by_category(all_tools(), "Library") {
        assert_eq!(tool_by_id(tool.id).map(|t| t.title), Some(tool.title));
    }
}
