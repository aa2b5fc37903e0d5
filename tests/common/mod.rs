//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temporary directory
pub fn create_temp_csv(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join(name);
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Read a converted file back as UTF-8 lines, terminators removed
pub fn read_lines(path: &Path) -> Vec<String> {
    let contents = std::fs::read_to_string(path).unwrap();
    contents.lines().map(|s| s.to_string()).collect()
}

/// Reverse the MySQL escaping of a whole output line into field values
pub fn unescape_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    let mut in_field = false;
    while let Some(c) = chars.next() {
        match (in_field, c) {
            (false, '"') => in_field = true,
            (false, ',') => {}
            (true, '\\') => current.extend(chars.next()),
            (true, '"') => {
                fields.push(std::mem::take(&mut current));
                in_field = false;
            }
            (true, c) => current.push(c),
            (false, c) => panic!("unexpected {:?} outside of a field in {:?}", c, line),
        }
    }
    assert!(!in_field, "unterminated field in {:?}", line);
    fields
}
