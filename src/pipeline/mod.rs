//! Pipeline module - reads, splits, normalizes and escapes CSV lines

pub mod error;
pub mod escape;
pub mod line;
pub mod normalize;
pub mod output;
pub mod reader;
pub mod splitter;

pub use error::*;
pub use escape::*;
pub use line::*;
pub use normalize::*;
pub use output::*;
pub use reader::*;
pub use splitter::*;
