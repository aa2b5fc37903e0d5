//! Line reader over any buffered input.
//!
//! Lines are read into a single buffer that grows as needed, so there is no
//! built-in limit on line length. A limit can be configured; lines over it are
//! reported as [`LineError::LineTooLong`] instead of being truncated, and only
//! a bounded prefix of them is ever held in memory.

use std::io::{self, BufRead, Read};

use super::error::LineError;

/// Reads raw lines, one physical line at a time.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    max_line_length: Option<usize>,
    line_number: usize,
    bytes_read: u64,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader. `max_line_length == 0` means unlimited.
    pub fn new(inner: R, max_line_length: usize) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            max_line_length: (max_line_length > 0).then_some(max_line_length),
            line_number: 0,
            bytes_read: 0,
        }
    }

    /// Total bytes consumed from the input so far, terminators included.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next line, without its `\n` or `\r\n` terminator.
    ///
    /// Returns `Ok(None)` at end of input. The line number is 1-based. The
    /// returned slice is valid until the next call. With a length limit, at
    /// most `max + 2` bytes of a line are buffered; the rest of an over-long
    /// line is skipped without being stored.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, Result<&[u8], LineError>)>> {
        self.buf.clear();
        let n = match self.max_line_length {
            // Room for the content plus a `\r\n` terminator.
            Some(max) => (&mut self.inner)
                .take(max as u64 + 2)
                .read_until(b'\n', &mut self.buf)?,
            None => self.inner.read_until(b'\n', &mut self.buf)?,
        };
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if let Some(max) = self.max_line_length {
            if !self.buf.ends_with(b"\n") && n == max + 2 {
                let (skipped, terminator) = self.skip_rest_of_line(self.buf.last().copied())?;
                self.bytes_read += (n + skipped) as u64;
                let err = LineError::LineTooLong {
                    length: n + skipped - terminator,
                    max,
                };
                return Ok(Some((self.line_number, Err(err))));
            }
        }
        self.bytes_read += n as u64;

        let mut line = self.buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        let line = match self.max_line_length {
            Some(max) if line.len() > max => Err(LineError::LineTooLong {
                length: line.len(),
                max,
            }),
            _ => Ok(line),
        };
        Ok(Some((self.line_number, line)))
    }

    /// Consume the remainder of the current physical line.
    ///
    /// `last` is the final byte already read from the line. Returns the number
    /// of bytes skipped and how many of them (0, 1 or 2) belong to the line
    /// terminator.
    fn skip_rest_of_line(&mut self, mut last: Option<u8>) -> io::Result<(usize, usize)> {
        let mut skipped = 0;
        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok((skipped, usize::from(last == Some(b'\r'))));
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    let before = if i > 0 { Some(available[i - 1]) } else { last };
                    self.inner.consume(i + 1);
                    let terminator = 1 + usize::from(before == Some(b'\r'));
                    return Ok((skipped + i + 1, terminator));
                }
                None => {
                    let len = available.len();
                    last = available.last().copied();
                    self.inner.consume(len);
                    skipped += len;
                }
            }
        }
    }
}
