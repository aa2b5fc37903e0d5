//! Field splitter: scans one CSV line into raw fields.
//!
//! The splitter never copies. Each [`RawField`] borrows its bytes from the
//! line, and quoted fields keep their `""` pairs so that normalization can
//! happen as a separate step.

use std::borrow::Cow;

use super::error::LineError;
use super::normalize::{is_csv_space, trim_field, unescape_quoted};

/// A single field as it appears in the line, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawField<'a> {
    /// Content between the delimiting quotes, `""` pairs left intact.
    Quoted(&'a [u8]),
    /// Content up to the next separator, surrounding whitespace included.
    Unquoted(&'a [u8]),
}

impl<'a> RawField<'a> {
    /// The semantic value of the field.
    ///
    /// Unquoted fields are trimmed, quoted fields have `""` collapsed to `"`.
    pub fn normalize(&self) -> Cow<'a, [u8]> {
        match *self {
            RawField::Unquoted(bytes) => Cow::Borrowed(trim_field(bytes)),
            RawField::Quoted(bytes) if !bytes.contains(&b'"') => Cow::Borrowed(bytes),
            RawField::Quoted(bytes) => Cow::Owned(unescape_quoted(bytes)),
        }
    }
}

/// Iterator over the fields of one line.
///
/// Yields `Err(LineError::UnclosedQuote)` at most once and then stops; the
/// caller is expected to drop the whole line in that case.
#[derive(Debug, Clone)]
pub struct FieldSplitter<'a> {
    line: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> FieldSplitter<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            pos: 0,
            // An empty line holds no fields at all.
            finished: line.is_empty(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.line.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_csv_space) {
            self.pos += 1;
        }
    }

    /// Scan a quoted field. `self.pos` is on the opening quote.
    fn quoted(&mut self) -> Result<RawField<'a>, LineError> {
        let line = self.line;
        let open = self.pos;
        let start = open + 1;
        let mut i = start;
        while i < line.len() {
            if line[i] == b'"' {
                if line.get(i + 1) == Some(&b'"') {
                    i += 2;
                    continue;
                }
                self.pos = i + 1;
                return Ok(RawField::Quoted(&line[start..i]));
            }
            i += 1;
        }
        Err(LineError::UnclosedQuote { column: open + 1 })
    }

    fn unquoted(&mut self) -> RawField<'a> {
        let line = self.line;
        let start = self.pos;
        let end = line[start..]
            .iter()
            .position(|&b| matches!(b, b',' | b'\n' | b'\r'))
            .map_or(line.len(), |off| start + off);
        self.pos = end;
        RawField::Unquoted(&line[start..end])
    }
}

impl<'a> Iterator for FieldSplitter<'a> {
    type Item = Result<RawField<'a>, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();
        let field = if self.peek() == Some(b'"') {
            match self.quoted() {
                Ok(field) => field,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        } else {
            self.unquoted()
        };

        if self.peek() == Some(b',') {
            self.pos += 1;
        }
        // Anything left after the separator, even whitespace, is another field.
        if matches!(self.peek(), None | Some(b'\n' | b'\r')) {
            self.finished = true;
        }

        Some(Ok(field))
    }
}

/// Split `line` into normalized field values.
pub fn split_fields(line: &[u8]) -> Result<Vec<Cow<'_, [u8]>>, LineError> {
    FieldSplitter::new(line)
        .map(|field| field.map(|f| f.normalize()))
        .collect()
}
