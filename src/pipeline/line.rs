//! Line assembly: one raw CSV line in, one MySQL-escaped output line out.

use super::error::LineError;
use super::escape::escape_into;
use super::splitter::FieldSplitter;

/// Convert one raw line into its output line, trailing `\n` included.
///
/// Nothing is produced when the line contains an unclosed quote. An empty
/// line has no fields and becomes a bare `\n`.
///
/// # Example
///
/// ```rust
/// use mysqlcsv::pipeline::convert_line;
///
/// let out = convert_line(br#"name, "O""Brien", 42"#).unwrap();
/// assert_eq!(out, b"\"name\",\"O\\\"Brien\",\"42\"\n");
/// ```
pub fn convert_line(line: &[u8]) -> Result<Vec<u8>, LineError> {
    let mut out = Vec::with_capacity(line.len() + 16);
    for (i, field) in FieldSplitter::new(line).enumerate() {
        let field = field?;
        if i > 0 {
            out.push(b',');
        }
        escape_into(&field.normalize(), &mut out);
    }
    out.push(b'\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(line: &str) -> String {
        String::from_utf8(convert_line(line.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_example_line() {
        assert_eq!(convert(r#"name, "O""Brien", 42"#), "\"name\",\"O\\\"Brien\",\"42\"\n");
    }

    #[test]
    fn test_embedded_comma_and_quote() {
        assert_eq!(convert(r#""a,b""c""#), "\"a,b\\\"c\"\n");
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(convert("a,,c"), "\"a\",\"\",\"c\"\n");
    }

    #[test]
    fn test_whitespace_only_field() {
        assert_eq!(convert(" , x"), "\"\",\"x\"\n");
    }

    #[test]
    fn test_backslash_is_escaped() {
        assert_eq!(convert(r"C:\temp,1"), "\"C:\\\\temp\",\"1\"\n");
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(convert(""), "\n");
    }

    #[test]
    fn test_unclosed_quote_produces_nothing() {
        assert_eq!(
            convert_line(br#"a,"unterminated"#),
            Err(LineError::UnclosedQuote { column: 3 })
        );
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let out = convert_line(b"caf\xe9,\xff").unwrap();
        assert_eq!(out, b"\"caf\xe9\",\"\xff\"\n");
    }
}
