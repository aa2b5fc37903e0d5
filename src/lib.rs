//! mysqlcsv: CSV to MySQL-escaped CSV Library
//!
//! A library for rewriting CSV lines so that every field is wrapped in
//! double quotes, with embedded quotes and backslashes backslash-escaped.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
