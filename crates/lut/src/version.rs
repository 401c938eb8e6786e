//! Compatibility policy between table files and this reader

use std::cmp::Ordering;

/// Version of the table layout implemented by this reader
///
/// Used unless the caller sets another with
/// [LutReader::set_reader_version()](crate::LutReader::set_reader_version).
pub const LUT_READER_VERSION: &str = "2.1.0";

/// Outcome of comparing a declared table version to the reader version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    /// Versions are equivalent
    Match,
    /// Table was written by an older version than the reader implements
    Older,
    /// Table was written by a newer version than the reader implements
    Newer,
}

/// Non-fatal disagreement between table and reader versions
///
/// Moderately older or newer tables remain loadable, so this is only ever
/// reported as a warning and never stops a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    /// Version declared by the table file
    pub declared: String,
    /// Version implemented by the reader
    pub known: String,
    /// Direction of the mismatch, never [VersionCheck::Match]
    pub check: VersionCheck,
}

impl VersionMismatch {
    /// Compare versions, returning `None` for equivalent versions
    pub fn check(declared: &str, known: &str) -> Option<Self> {
        match compare_versions(declared, known) {
            VersionCheck::Match => None,
            check => Some(Self {
                declared: declared.to_string(),
                known: known.to_string(),
                check,
            }),
        }
    }

    /// True if the leading version component differs
    pub fn is_major(&self) -> bool {
        let declared = components(&self.declared);
        let known = components(&self.known);
        declared.first() != known.first()
    }
}

impl std::fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let relation = match self.check {
            VersionCheck::Older => "older than",
            VersionCheck::Newer => "newer than",
            VersionCheck::Match => "equal to",
        };
        write!(
            f,
            "table version {} is {relation} reader version {}",
            self.declared, self.known
        )?;
        if self.is_major() {
            write!(f, " (major version differs, results may be unreliable)")?;
        }
        Ok(())
    }
}

/// Compare two dot-separated version strings
///
/// Numeric components are compared as integers and missing trailing
/// components count as zero, so `2.1` and `2.1.0` are equivalent. A leading
/// `v` is ignored. Components that are not integers compare as text and sort
/// after any integer, which keeps the ordering total.
///
/// ```rust
/// # use lutools_lut::{compare_versions, VersionCheck};
/// assert_eq!(compare_versions("2.1", "2.1.0"), VersionCheck::Match);
/// assert_eq!(compare_versions("2.0", "2.1"), VersionCheck::Older);
/// assert_eq!(compare_versions("2.10", "2.9"), VersionCheck::Newer);
/// ```
pub fn compare_versions(declared: &str, known: &str) -> VersionCheck {
    let declared = components(declared);
    let known = components(known);
    let n = declared.len().max(known.len());

    let zero = Component::Number(0);
    for i in 0..n {
        let a = declared.get(i).unwrap_or(&zero);
        let b = known.get(i).unwrap_or(&zero);
        match a.cmp(b) {
            Ordering::Less => return VersionCheck::Older,
            Ordering::Greater => return VersionCheck::Newer,
            Ordering::Equal => continue,
        }
    }
    VersionCheck::Match
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Component {
    Number(u64),
    Text(String),
}

fn components(version: &str) -> Vec<Component> {
    let version = version.trim();
    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);

    version
        .split('.')
        .map(|c| match c.trim().parse::<u64>() {
            Ok(n) => Component::Number(n),
            Err(_) => Component::Text(c.trim().to_string()),
        })
        .collect()
}
