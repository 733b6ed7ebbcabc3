//! folio - a portfolio you can read in the terminal.
//!
//! The library half exposes the static catalog, the view-state model
//! (category filter, featured partition, card expansion, nav menu), and
//! the TUI shell so integration tests can drive them without a terminal.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod tui;
pub mod view;
