//! Reader-to-writer wrapper around the rewriting engine.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::rewrite::append_end_statements;

/// Rewrite one script from `input` to `output`.
///
/// The whole result is produced before anything is written, so a fatal
/// continuation error leaves `output` untouched.
pub fn rewrite_file<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    let rewritten = append_end_statements(input)?;
    output.write_all(rewritten.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use super::*;

    #[test]
    fn test_rewrite_to_writer() {
        let reader = BufReader::new(Cursor::new("if 1\n  echo\n"));
        let mut output = Vec::new();
        rewrite_file(reader, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "if 1\n  echo\nendif\n");
    }

    #[test]
    fn test_error_leaves_output_empty() {
        let reader = BufReader::new(Cursor::new("\\ 1\n"));
        let mut output = Vec::new();
        assert!(rewrite_file(reader, &mut output).is_err());
        assert!(output.is_empty());
    }
}
