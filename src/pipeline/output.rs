//! Output file naming

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Suffix appended to the input's base name.
pub const OUTPUT_SUFFIX: &str = "_mysql.csv";

/// Derive the output path for `input`.
///
/// Directory components are stripped using both `/` and `\` as separators,
/// whatever the host platform, and so is the last `.`-delimited extension.
/// The name is handled as raw bytes, so names that are not valid UTF-8 are
/// kept as they are. The result is relative, so it lands in the current
/// working directory.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let bytes = input.as_os_str().as_encoded_bytes();
    let name_start = bytes
        .iter()
        .rposition(|&b| b == b'/' || b == b'\\')
        .map_or(0, |i| i + 1);
    let name = &bytes[name_start..];
    let base = match name.iter().rposition(|&b| b == b'.') {
        Some(dot) => &name[..dot],
        None => name,
    };
    // SAFETY: `base` was cut out of a valid OsStr at ASCII separators only,
    // which the encoded-bytes contract allows.
    let base = unsafe { OsStr::from_encoded_bytes_unchecked(base) };

    let mut file_name = base.to_os_string();
    file_name.push(OUTPUT_SUFFIX);
    PathBuf::from(file_name)
}
