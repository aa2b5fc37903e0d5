//! CLI module - argument parsing and the conversion driver

mod args;
pub mod convert;

pub use args::Cli;
pub use convert::{run_convert, ConvertOptions};
