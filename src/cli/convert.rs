//! CSV to MySQL-escaped CSV conversion

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::pipeline::{convert_line, derive_output_path, ConvertError, LineReader};
use crate::report::ConversionSummary;
use crate::utils::{
    create_byte_progress_bar, display_bytes, finish_with_success, print_info, print_success,
    print_warning,
};

/// Options for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Maximum line length in bytes; 0 means no limit
    pub max_line_length: usize,
}

/// Convert `input` into a MySQL-escaped CSV file.
///
/// # Arguments
/// * `input` - Path to the input CSV file
/// * `output` - Optional output path. If not provided, uses the input's base
///   name with a `_mysql.csv` suffix in the current directory
/// * `options` - Line length limit
///
/// Malformed lines are reported on stderr and skipped; they are listed in the
/// returned summary. Failing to open the input, create the output, or do I/O
/// on either aborts the run.
pub fn run_convert(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let started = Instant::now();

    let input_file = File::open(input).map_err(|source| ConvertError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let total_bytes = input_file.metadata().map(|m| m.len()).unwrap_or(0);

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => derive_output_path(input),
    };
    let output_file = File::create(&output_path).map_err(|source| ConvertError::OutputCreate {
        path: output_path.clone(),
        source,
    })?;

    let mut reader = LineReader::new(BufReader::new(input_file), options.max_line_length);
    let mut writer = BufWriter::new(output_file);
    let mut summary = ConversionSummary::new(input.to_path_buf(), output_path.clone());

    let pb = create_byte_progress_bar(total_bytes, "Converting");
    let mut first_row = true;

    while let Some((line_number, line)) = reader.next_line().map_err(ConvertError::Read)? {
        match line.and_then(convert_line) {
            Ok(converted) => {
                writer.write_all(&converted).map_err(ConvertError::Write)?;
                summary.record_written(converted.len());
                if first_row {
                    pb.suspend(|| print_info(&format!("First row: {}", display_bytes(&converted))));
                    first_row = false;
                }
            }
            Err(err) => {
                pb.suspend(|| print_warning(&format!("Line {}: {}", line_number, err)));
                summary.record_dropped(line_number, err);
            }
        }
        pb.set_position(reader.bytes_read());
    }

    writer.flush().map_err(ConvertError::Write)?;
    finish_with_success(&pb, "Conversion complete");

    summary.bytes_read = reader.bytes_read();
    summary.elapsed = started.elapsed();

    print_success(&format!(
        "MySQL-optimized CSV created: {}",
        output_path.display()
    ));

    Ok(summary)
}
