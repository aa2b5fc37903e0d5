//! mysqlcsv: CSV to MySQL CLI Tool
//!
//! A command-line tool that rewrites a CSV file with every field quoted
//! and escaped, ready for MySQL `LOAD DATA INFILE`.

use anyhow::Result;
use clap::Parser;

use mysqlcsv::cli::{run_convert, Cli, ConvertOptions};
use mysqlcsv::utils::{init_console, print_header};

fn main() -> Result<()> {
    init_console();
    let cli = Cli::parse();

    let output_path = cli.output_path();
    print_header(env!("CARGO_PKG_VERSION"), &cli.input, &output_path);

    let options = ConvertOptions {
        max_line_length: cli.max_line_length,
    };
    let summary = run_convert(&cli.input, Some(&output_path), &options)?;

    if !cli.no_summary {
        summary.display();
    }

    Ok(())
}
