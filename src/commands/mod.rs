pub mod show;
pub mod tools;

pub use show::handle_show;
pub use tools::handle_tools;
