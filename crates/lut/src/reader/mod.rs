//! Parsers and logic for reading lookup table files
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest method for reading a table is the convenience function:
//!
//! ```rust, no_run
//! # use lutools_lut::{read_lut, Table};
//! let table: Table = read_lut("/path/to/table.lut").unwrap();
//! ```
//!
//! Under the hood this initialises a [LutReader]. This is made public for
//! runs where several processes load the same table, since only one of them
//! should be reporting problems.
//!
//! ```rust, no_run
//! # use lutools_lut::LutReader;
//! // e.g. a rank from the surrounding parallel framework
//! let rank = 3;
//!
//! let mut reader = LutReader::new();
//! reader.set_coordinator(rank == 0);
//! reader.set_reader_version("2.1");
//! let table = reader.parse("/path/to/table.lut").unwrap();
//! ```
//!
//! # Implementation overview
//!
//! A load is a single front-to-back pass over the file:
//!
//! ```text
//! Opened -> HeaderParsed -> LevelParsed (per level) -> Complete
//! ```
//!
//! Any step can fail instead, in which case the error is returned and no part
//! of the table is exposed. Nothing is retried, the file will not change
//! between attempts.
//!
//! Every count declared in the header is checked against what is actually in
//! the file. The per-level `<Data>`, `<Triangles>`, and `<Hull>` blocks are
//! closed by a matching `</...>` marker so that both short and over-long
//! blocks are caught.
//!
//! # Formatting notes
//!
//! **Filler is ignored**
//!
//! > Anything between the end of one section and the next expected marker is
//! > skipped, so free text, comments, and blank lines can go anywhere between
//! > sections.
//!
//! **Comments inside sections**
//!
//! > Lines starting with `#` and blank lines are skipped inside sections too.
//!
//! **Variable names**
//!
//! > Names are one per line and may keep an `index:` prefix, which is
//! > stripped. i.e. `1:Temperature` and `Temperature` are equivalent.
//!
//! **Line endings**
//!
//! > Trailing control characters are removed from every line, so files
//! > written with `\r\n` endings parse the same.

// reader modules
mod header;
mod level;
mod lut;
mod parsers;
mod scanner;

// re-exports for clean API + documentation
#[doc(inline)]
pub use lut::LutReader;

// library imports
use crate::error::Result;
use crate::Table;
use std::path::Path;

/// Read a lookup table file
///
/// Returns a result containing the [Table] extracted from the file at `path`,
/// using the default [LutReader] configuration.
///
/// - `path` - Path to the table file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use lutools_lut::{read_lut, Table};
/// let table: Table = read_lut("path/to/table.lut").unwrap();
/// ```
pub fn read_lut<P: AsRef<Path>>(path: P) -> Result<Table> {
    LutReader::new().parse(path)
}

/// Read a lookup table file against a specific reader version
///
/// Identical to [read_lut()] but compares the declared table version with
/// `version` instead of [LUT_READER_VERSION](crate::LUT_READER_VERSION).
///
/// Example
/// ```rust, no_run
/// # use lutools_lut::{read_lut_with_version, Table};
/// let table: Table = read_lut_with_version("path/to/table.lut", "2.0").unwrap();
/// ```
pub fn read_lut_with_version<P: AsRef<Path>>(path: P, version: &str) -> Result<Table> {
    let mut reader = LutReader::new();
    reader.set_reader_version(version);
    reader.parse(path)
}
