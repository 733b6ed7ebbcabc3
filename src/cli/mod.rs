pub mod types;

pub use types::{Cli, Commands};
