//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::derive_output_path;

/// mysqlcsv - Rewrite a CSV file with every field quoted and escaped for MySQL
#[derive(Parser, Debug)]
#[command(name = "mysqlcsv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path
    pub input: PathBuf,

    /// Output file path.
    /// Defaults to the input's base name with a '_mysql.csv' suffix in the
    /// current directory (e.g., /data/orders.csv → ./orders_mysql.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum line length in bytes, excluding the line terminator.
    /// Longer lines are reported and skipped instead of converted.
    /// Use 0 for no limit.
    #[arg(long, default_value = "0")]
    pub max_line_length: usize,

    /// Skip the summary table printed after conversion
    #[arg(long, default_value = "false")]
    pub no_summary: bool,
}

impl Cli {
    /// Get the output path, deriving it from the input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.input))
    }
}
