//! Low-level line scanning over a buffered table file

// crate modules
use crate::error::{Error, Result};
use crate::reader::parsers;

// standard library
use std::io::{BufRead, Lines};

/// Forward-only line scanner
///
/// Every read has three possible outcomes:
///
/// - `Ok(Some(line))` - a line was produced
/// - `Ok(None)` - the stream is exhausted, which is not an error by itself
/// - `Err(_)` - the underlying stream failed
///
/// The scanner never rewinds. Markers are therefore expected in the fixed
/// order documented on [Section](crate::Section), and an out-of-order marker
/// is skipped like any other filler.
#[derive(Debug)]
pub(crate) struct Scanner<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line read, 0 before any read
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read exactly one line with trailing control characters removed
    ///
    /// Handles `\r\n` endings and stray trailing control characters so that
    /// tokenising is independent of the platform that wrote the file.
    pub(crate) fn stripped_line(&mut self) -> Result<Option<String>> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };

        self.line_number += 1;
        let mut line = line?;
        let length = line
            .trim_end_matches(|c: char| c.is_control() || c.is_whitespace())
            .len();
        line.truncate(length);
        Ok(Some(line))
    }

    /// Read up to the next line with anything other than whitespace
    pub(crate) fn next_non_empty_line(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.stripped_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Read up to the next line that is neither blank nor a `#` comment
    pub(crate) fn next_content_line(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.next_non_empty_line()? {
            if !parsers::is_comment(&line) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Discard everything up to and including the `marker` line
    ///
    /// Fails with [Error::MissingSection] if the stream runs out first.
    pub(crate) fn skip_to_marker(&mut self, marker: &str) -> Result<()> {
        while let Some(line) = self.stripped_line()? {
            if line.trim() == marker {
                return Ok(());
            }
        }
        Err(Error::missing(marker, self.line_number))
    }
}
