//! Utilities - terminal styling, progress bars and console setup

pub mod console_setup;
pub mod progress;
pub mod styling;

pub use console_setup::*;
pub use progress::*;
pub use styling::*;
