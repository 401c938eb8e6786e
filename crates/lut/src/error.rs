//! Result and Error types for lutools-lut

use crate::section::Section;
use std::path::PathBuf;

/// Type alias for `Result<T, lut::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `lutools-lut` crate
///
/// Every variant is fatal to a load. A version mismatch between the table and
/// the reader is not an error, see [VersionMismatch](crate::VersionMismatch).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The table file could not be opened for reading
    #[error("unable to open {path:?} for reading")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reading from an already opened stream
    #[error("failed input/output stream")]
    Io(#[from] std::io::Error),

    /// A required marker was never found before the end of the stream
    #[error("required section \"{marker}\" not found (stopped at line {line})")]
    MissingSection { marker: String, line: usize },

    /// Declared counts, numeric tokens, or point indices do not agree with
    /// the payload
    #[error("malformed {section} section{} at line {line}: {reason}", level_suffix(.level))]
    MalformedData {
        section: Section,
        level: Option<usize>,
        line: usize,
        reason: String,
    },

    /// The same variable name appears more than once
    #[error("duplicate variable name \"{name}\" at line {line}")]
    DuplicateVariable { name: String, line: usize },
}

impl Error {
    /// Shorthand for the common [Error::MalformedData] case
    pub(crate) fn malformed(
        section: Section,
        level: Option<usize>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedData {
            section,
            level,
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(marker: &str, line: usize) -> Self {
        Self::MissingSection {
            marker: marker.to_string(),
            line,
        }
    }
}

fn level_suffix(level: &Option<usize>) -> String {
    match level {
        Some(i) => format!(" of level {i}"),
        None => String::new(),
    }
}
