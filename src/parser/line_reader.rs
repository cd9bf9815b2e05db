//! Physical-to-logical line joining
//!
//! A physical line ending in `\` is glued to the next one with the backslash
//! removed. Each piece is trimmed before it is appended, so no separator is
//! inserted between them.

use std::io::{BufRead, Lines};

use crate::constants::CONTINUATION;
use crate::error::{IniError, Result};

/// One or more physical lines joined by continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub text: String,
    /// 1-based number of the last physical line that went into `text`
    pub line: usize,
}

/// Iterator over the non-empty logical lines of a reader
pub struct LogicalLines<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LogicalLines<R> {
    pub fn new(reader: R) -> Self {
        LogicalLines {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_physical(&mut self) -> Option<Result<String>> {
        let next = self.lines.next()?;
        self.line += 1;
        Some(next.map_err(IniError::from))
    }

    fn read_logical(&mut self, first: String) -> Result<String> {
        let mut text = first.trim().to_string();

        while text.ends_with(CONTINUATION) {
            text.pop();
            match self.next_physical() {
                Some(next) => text.push_str(next?.trim()),
                None => return Err(IniError::UnexpectedEof { line: self.line }),
            }
        }

        Ok(text)
    }
}

impl<R: BufRead> Iterator for LogicalLines<R> {
    type Item = Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let physical = match self.next_physical()? {
                Ok(physical) => physical,
                Err(e) => return Some(Err(e)),
            };

            match self.read_logical(physical) {
                Ok(text) if text.is_empty() => continue,
                Ok(text) => {
                    return Some(Ok(LogicalLine {
                        text,
                        line: self.line,
                    }))
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Result<Vec<LogicalLine>> {
        LogicalLines::new(input.as_bytes()).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        collect(input)
            .unwrap()
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    #[test]
    fn test_trims_and_skips_blank_lines() {
        assert_eq!(texts("  a = 1  \n\n   \n\tb = 2\n"), vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn test_joins_continuation_without_separator() {
        assert_eq!(texts("a = 1\\\n2\n"), vec!["a = 12"]);
        assert_eq!(texts("a = one \\\n   two\\\n three\n"), vec!["a = one twothree"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(texts("a = 1\r\nb = 2\r\n"), vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn test_reports_last_physical_line() {
        let lines = collect("\n[s]\nk = a\\\nb\\\nc\nx = y").unwrap();
        let numbers: Vec<usize> = lines.iter().map(|l| l.line).collect();
        assert_eq!(numbers, vec![2, 5, 6]);
    }

    #[test]
    fn test_eof_during_continuation() {
        let err = collect("a = 1\nb = 2\\").unwrap_err();
        assert!(matches!(err, IniError::UnexpectedEof { line: 2 }));
    }

    #[test]
    fn test_continuation_into_blank_line_is_skipped() {
        assert_eq!(texts("\\\n\nk = v\n"), vec!["k = v"]);
    }
}
