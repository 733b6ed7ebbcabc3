//! View-state model: category filter, featured partition, card expansion,
//! and the navigation menu state machine.
//!
//! Everything here is pure or locally owned mutable state; no I/O and no
//! failure paths (an unknown category filters to nothing, it never errors).

pub mod cards;
pub mod filter;
pub mod nav;

pub use cards::ExpandedCard;
pub use filter::{ALL_CATEGORIES, category_strip, filter_by_category, partition_featured};
pub use nav::{MenuState, NavItem, Page, NAV_ITEMS};
