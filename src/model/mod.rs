pub mod config;
pub mod task;
pub mod view_mode;

pub use config::*;
pub use task::*;
pub use view_mode::*;
