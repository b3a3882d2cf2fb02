/// `LineSource` - Reads physical lines with end-of-line markers removed
///
/// Input may use `\n` or `\r\n` line endings, even mixed; the `\r` is
/// stripped wherever present so the rest of the rewriter never sees one.
/// Output always uses plain `\n` (Vim on Unix rejects stray `\r`s, see
/// :help :source_crnl).
use std::io::{BufRead, BufReader};

use crate::error::Result;

/// `LineSource` yields successive input lines without their terminators.
pub struct LineSource<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Get the number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, stripping the trailing `\n` and any `\r` before it.
    ///
    /// Returns `Ok(None)` at end of input. A final line without a terminator
    /// is still yielded.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                if line.ends_with('\n') {
                    line.pop();
                }
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Helper to create `LineSource` from a string (for testing)
impl<'a> LineSource<BufReader<&'a [u8]>> {
    #[must_use]
    pub fn from_string(s: &'a str) -> Self {
        Self::new(BufReader::new(s.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_line_endings() {
        let mut source = LineSource::from_string("if 1\n  echo\n");
        assert_eq!(source.next_line().unwrap().unwrap(), "if 1");
        assert_eq!(source.next_line().unwrap().unwrap(), "  echo");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_dos_line_endings() {
        let mut source = LineSource::from_string("if 1\r\n.\r\n");
        assert_eq!(source.next_line().unwrap().unwrap(), "if 1");
        assert_eq!(source.next_line().unwrap().unwrap(), ".");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_mixed_line_endings() {
        let mut source = LineSource::from_string("a\r\nb\nc\r\n");
        assert_eq!(source.next_line().unwrap().unwrap(), "a");
        assert_eq!(source.next_line().unwrap().unwrap(), "b");
        assert_eq!(source.next_line().unwrap().unwrap(), "c");
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut source = LineSource::from_string("echo\necho again");
        assert_eq!(source.next_line().unwrap().unwrap(), "echo");
        assert_eq!(source.next_line().unwrap().unwrap(), "echo again");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_bare_cr_line_becomes_empty() {
        // A \r\n-only line must not be mistaken for a statement
        let mut source = LineSource::from_string("\r\n");
        assert_eq!(source.next_line().unwrap().unwrap(), "");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_empty_input() {
        let mut source = LineSource::from_string("");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn test_line_number_tracking() {
        let mut source = LineSource::from_string("a\nb\n");
        assert_eq!(source.line_number(), 0);
        source.next_line().unwrap();
        assert_eq!(source.line_number(), 1);
        source.next_line().unwrap();
        assert_eq!(source.line_number(), 2);
    }
}
