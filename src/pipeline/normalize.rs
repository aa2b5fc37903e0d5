//! Field normalization: turns a raw CSV field into its semantic value.

/// Whitespace as classified by C's `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
pub fn is_csv_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Strip whitespace from both ends of an unquoted field.
///
/// Interior whitespace is preserved exactly.
pub fn trim_field(field: &[u8]) -> &[u8] {
    let start = field
        .iter()
        .position(|&b| !is_csv_space(b))
        .unwrap_or(field.len());
    let end = field
        .iter()
        .rposition(|&b| !is_csv_space(b))
        .map_or(start, |i| i + 1);
    &field[start..end]
}

/// Collapse every `""` pair in the body of a quoted field into a single `"`.
///
/// Lone quotes are kept as they are.
pub fn unescape_quoted(field: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(field.len());
    let mut i = 0;
    while i < field.len() {
        out.push(field[i]);
        if field[i] == b'"' && field.get(i + 1) == Some(&b'"') {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}
