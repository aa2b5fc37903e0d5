//! Error types for the CSV to MySQL conversion.
//!
//! Errors come in two tiers. A [`LineError`] is contained to the offending
//! line: the line is dropped and conversion continues. A [`ConvertError`]
//! aborts the whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A malformed input line. The line contributes nothing to the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// A quoted field has no closing quote before the end of the line.
    ///
    /// `column` is the 1-based byte column of the opening quote.
    #[error("unclosed quote in CSV (quoted field starting at column {column})")]
    UnclosedQuote { column: usize },

    /// The line is longer than the configured maximum line length.
    #[error("line is {length} bytes long, exceeding the maximum of {max} bytes")]
    LineTooLong { length: usize, max: usize },
}

/// A failure that ends the conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error opening input file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating output file {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while reading input: {0}")]
    Read(#[source] io::Error),

    #[error("I/O error while writing output: {0}")]
    Write(#[source] io::Error),
}
