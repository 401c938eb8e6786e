// crate modules
use crate::error::{Error, Result};
use crate::reader::{parsers, scanner::Scanner};
use crate::section::{Block, Section};
use crate::table::Table;
use crate::version::LUT_READER_VERSION;

// lutools modules
use lutools_utils::f;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::{debug, error, info};

/// A configurable reader for lookup table files
///
/// All configuration is supplied by the caller, including whether this
/// process is the one allowed to report problems.
///
/// Notes:
///
/// - Only the coordinator logs `info`, `warn`, and `error` messages
/// - Every reader fails in the same way regardless of the coordinator flag
/// - A version mismatch is a warning, the table is still loaded
///
/// Minimal Example:
/// ```rust, no_run
/// # use lutools_lut::LutReader;
/// let mut reader = LutReader::new();
/// reader.set_coordinator(false);
/// let table = reader.parse("path/to/table.lut").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LutReader {
    /// Table layout version this reader claims to implement
    reader_version: String,
    /// Allowed to emit diagnostics?
    is_coordinator: bool,
}

impl Default for LutReader {
    fn default() -> Self {
        Self {
            reader_version: LUT_READER_VERSION.to_string(),
            is_coordinator: true,
        }
    }
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl LutReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Load the table file at `path`
    ///
    /// Fails with [Error::FileAccess] if the file can not be opened, otherwise
    /// see [LutReader::parse_from()].
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        if self.is_coordinator {
            info!("Reading {}", path.display());
        }

        let file = File::open(path)
            .map_err(|source| Error::FileAccess {
                path: path.to_path_buf(),
                source,
            })
            .inspect_err(|e| self.report(e))?;

        self.parse_from(BufReader::new(file))
    }

    /// Load a table from any buffered source
    ///
    /// Returns the complete [Table], or the first fatal problem found. No
    /// partially built table is ever returned.
    pub fn parse_from<R: BufRead>(&self, reader: R) -> Result<Table> {
        Pass::new(self, reader)
            .run()
            .inspect_err(|e| self.report(e))
    }

    /// Setter for the version declared tables are compared against
    pub fn set_reader_version(&mut self, version: impl Into<String>) {
        self.reader_version = version.into();
    }

    /// Setter for whether this reader may emit diagnostics
    pub fn set_coordinator(&mut self, is_coordinator: bool) {
        self.is_coordinator = is_coordinator;
    }

    /// Version declared tables are compared against
    pub fn reader_version(&self) -> &str {
        &self.reader_version
    }

    /// Whether this reader emits diagnostics
    pub fn is_coordinator(&self) -> bool {
        self.is_coordinator
    }

    /// Log a fatal error with its full chain of causes, coordinator only
    fn report(&self, err: &Error) {
        if !self.is_coordinator {
            return;
        }

        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message += &f!(": {cause}");
            source = cause.source();
        }
        error!("{message}");
    }
}

// ! ------------------------------------------------------------------------
// !                        Single pass over one source
// ! ------------------------------------------------------------------------

/// State for one load, dropped as soon as the table is built or a step fails
pub(super) struct Pass<'a, R> {
    pub(super) config: &'a LutReader,
    pub(super) scanner: Scanner<R>,
}

impl<'a, R: BufRead> Pass<'a, R> {
    fn new(config: &'a LutReader, reader: R) -> Self {
        Self {
            config,
            scanner: Scanner::new(reader),
        }
    }

    fn run(mut self) -> Result<Table> {
        let header = self.parse_header()?;
        debug!("Header read successful");

        let mut levels = Vec::with_capacity(header.sizes.len());
        for (index, sizes) in header.sizes.iter().enumerate() {
            levels.push(self.parse_level(index, sizes, header.names.len())?);
            debug!("Level {index} read successful");
        }

        Ok(Table {
            version_lut: header.version_lut,
            version_target: header.version_target,
            version_reader: self.config.reader_version.clone(),
            dimension: header.dimension,
            names: header.names,
            levels,
        })
    }

    /// Next content line that is expected to hold a value
    ///
    /// Running out of file or hitting another marker means the section is
    /// shorter than declared.
    pub(super) fn next_value_line(
        &mut self,
        section: Section,
        level: Option<usize>,
    ) -> Result<(usize, String)> {
        let line = self.scanner.next_content_line()?;
        let n = self.scanner.line_number();
        match line {
            None => Err(Error::malformed(section, level, n, "unexpected end of file")),
            Some(line) if parsers::is_marker(&line) => Err(Error::malformed(
                section,
                level,
                n,
                f!("expected a value, found marker \"{}\"", line.trim()),
            )),
            Some(line) => Ok((n, line)),
        }
    }

    /// Skip to the section marker and read the single value line after it
    pub(super) fn read_single(&mut self, section: Section) -> Result<(usize, String)> {
        self.scanner.skip_to_marker(section.marker())?;
        self.next_value_line(section, None)
    }

    /// Collect every content line of a `<...>` block up to its closing marker
    ///
    /// Lines are returned with their line numbers for error reporting. The
    /// number of lines is left for the caller to check.
    pub(super) fn read_block(&mut self, block: Block) -> Result<Vec<(usize, String)>> {
        self.scanner.skip_to_marker(block.section().marker())?;
        let closing = block.closing_marker();

        let mut lines = Vec::new();
        loop {
            match self.scanner.next_content_line()? {
                Some(line) if line.trim() == closing => return Ok(lines),
                Some(line) if parsers::is_marker(&line) => {
                    return Err(Error::missing(closing, self.scanner.line_number()))
                }
                Some(line) => lines.push((self.scanner.line_number(), line)),
                None => return Err(Error::missing(closing, self.scanner.line_number())),
            }
        }
    }
}
