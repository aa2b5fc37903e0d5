//! MySQL field escaping.
//!
//! The output matches what `LOAD DATA INFILE` expects with
//! `FIELDS ENCLOSED BY '"' ESCAPED BY '\\'`: every field is wrapped in double
//! quotes and each literal `"` or `\` inside it is prefixed with a backslash.

/// Append the escaped form of `field` to `out`.
pub fn escape_into(field: &[u8], out: &mut Vec<u8>) {
    out.reserve(field.len() + 2);
    out.push(b'"');
    for &b in field {
        if b == b'"' || b == b'\\' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out.push(b'"');
}

/// Wrap `field` in double quotes, backslash-escaping embedded `"` and `\`.
pub fn escape_for_mysql(field: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(field.len() + 2);
    escape_into(field, &mut out);
    out
}

/// Reverse [`escape_for_mysql`].
///
/// Returns `None` if `escaped` is not something the escaper could have
/// produced: missing outer quotes, a bare `"` inside, or a dangling `\`.
pub fn unescape_mysql(escaped: &[u8]) -> Option<Vec<u8>> {
    let inner = escaped.strip_prefix(b"\"")?.strip_suffix(b"\"")?;
    let mut out = Vec::with_capacity(inner.len());
    let mut bytes = inner.iter();
    while let Some(&b) = bytes.next() {
        match b {
            b'\\' => match bytes.next() {
                Some(&next @ (b'"' | b'\\')) => out.push(next),
                _ => return None,
            },
            b'"' => return None,
            _ => out.push(b),
        }
    }
    Some(out)
}
