//! Interactive terminal shell: pages, navigation, and the event loop.

pub mod event_loop;
pub mod layout;
pub mod render;
pub mod state;

pub use event_loop::run;
pub use state::TuiState;
