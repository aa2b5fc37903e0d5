//! Conversion summary report

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::LineError;

/// An input line that was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    /// 1-based line number in the input file
    pub line_number: usize,
    pub reason: LineError,
}

/// Summary of one conversion run
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines_read: usize,
    pub lines_written: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub dropped: Vec<DroppedLine>,
    pub elapsed: Duration,
}

impl ConversionSummary {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            ..Default::default()
        }
    }

    pub fn record_written(&mut self, bytes: usize) {
        self.lines_read += 1;
        self.lines_written += 1;
        self.bytes_written += bytes as u64;
    }

    pub fn record_dropped(&mut self, line_number: usize, reason: LineError) {
        self.lines_read += 1;
        self.dropped.push(DroppedLine {
            line_number,
            reason,
        });
    }

    /// Number of lines dropped because of an unclosed quote
    pub fn unclosed_quotes(&self) -> usize {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, LineError::UnclosedQuote { .. }))
            .count()
    }

    /// Number of lines dropped for exceeding the maximum line length
    pub fn too_long(&self) -> usize {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, LineError::LineTooLong { .. }))
            .count()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📄 Lines Read"), Cell::new(self.lines_read)]);

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Unclosed Quote)"),
            count_cell(self.unclosed_quotes()),
        ]);

        table.add_row(vec![
            Cell::new("📏 Dropped (Line Too Long)"),
            count_cell(self.too_long()),
        ]);

        table.add_row(vec![
            Cell::new("✅ Lines Written"),
            Cell::new(self.lines_written)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped.is_empty() {
            println!();
            let shown = self.dropped.iter().take(10);
            for dropped in shown {
                println!(
                    "      {} line {}: {}",
                    style("✗").red(),
                    dropped.line_number,
                    dropped.reason
                );
            }
            if self.dropped.len() > 10 {
                println!(
                    "      {}",
                    style(format!("... and {} more", self.dropped.len() - 10)).dim()
                );
            }
        }
        println!();
    }
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).fg(if count == 0 { Color::White } else { Color::Red })
}
