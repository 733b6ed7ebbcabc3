//! Static portfolio data: the project catalog plus the home-page profile.
//!
//! Everything here is built once from source literals and never mutated.

pub mod entries;
pub mod profile;
pub mod types;

pub use entries::{all_tools, tool_by_id};
pub use types::{Category, Highlight, Profile, Skill, Tool};
