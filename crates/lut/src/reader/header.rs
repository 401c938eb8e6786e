// internal
use super::lut::Pass;
use crate::error::{Error, Result};
use crate::reader::parsers::*;
use crate::section::Section;
use crate::table::Dimension;
use crate::version::VersionMismatch;

// lutools modules
use lutools_utils::{f, SliceExt};

// external
use itertools::Itertools;
use log::{debug, trace, warn};
use std::io::BufRead;

/// Declared sizes of a single level
#[derive(Debug, Clone, PartialEq)]
pub(super) struct LevelSizes {
    pub n_points: usize,
    pub n_triangles: usize,
    pub n_hull_points: usize,
    /// Always `0.0` for 2-D tables
    pub coordinate: f64,
}

/// Everything declared ahead of the per-level blocks
#[derive(Debug)]
pub(super) struct Header {
    pub version_lut: String,
    pub version_target: String,
    pub dimension: Dimension,
    pub sizes: Vec<LevelSizes>,
    pub names: Vec<String>,
}

// ! Header sections
impl<R: BufRead> Pass<'_, R> {
    pub(super) fn parse_header(&mut self) -> Result<Header> {
        debug!("----------------------");
        debug!(" Parsing Header block ");
        debug!("----------------------");

        let version_lut = self.parse_version(Section::Version)?;
        debug!("Version        = {version_lut:?}");

        // never fatal, moderately older/newer tables should still load
        if let Some(mismatch) = VersionMismatch::check(&version_lut, self.config.reader_version()) {
            if self.config.is_coordinator() {
                warn!("{mismatch}");
            }
        }

        let version_target = self.parse_version(Section::ReaderVersion)?;
        debug!("Reader version = {version_target:?}");

        let dimension = self.parse_dimension()?;
        debug!("Dimension      = {}", dimension.value());

        let n_levels = self.parse_level_count(dimension)?;
        debug!("n levels       = {n_levels}");

        let sizes = self.parse_level_sizes(dimension, n_levels)?;
        trace!("Level sizes    = {sizes:#?}");

        let names = self.parse_variables()?;
        debug!("Variables      = {names:?}");

        Ok(Header {
            version_lut,
            version_target,
            dimension,
            sizes,
            names,
        })
    }

    fn parse_version(&mut self, section: Section) -> Result<String> {
        let (n, line) = self.read_single(section)?;
        parse_word(&line).map(str::to_string).ok_or_else(|| {
            Error::malformed(
                section,
                None,
                n,
                f!("expected a single version string, found \"{}\"", line.trim()),
            )
        })
    }

    fn parse_dimension(&mut self) -> Result<Dimension> {
        let (n, line) = self.read_single(Section::Dimension)?;
        parse_index(line.trim())
            .and_then(|d| Dimension::try_from(d as u64).ok())
            .ok_or_else(|| {
                Error::malformed(
                    Section::Dimension,
                    None,
                    n,
                    f!("expected 2 or 3, found \"{}\"", line.trim()),
                )
            })
    }

    fn parse_level_count(&mut self, dimension: Dimension) -> Result<usize> {
        let section = Section::LevelCount;
        let (n, line) = self.read_single(section)?;

        let n_levels = parse_index(line.trim()).ok_or_else(|| {
            Error::malformed(
                section,
                None,
                n,
                f!("expected a level count, found \"{}\"", line.trim()),
            )
        })?;

        match (dimension, n_levels) {
            (_, 0) => Err(Error::malformed(
                section,
                None,
                n,
                "table must have at least one level",
            )),
            (Dimension::Two, n_levels) if n_levels != 1 => Err(Error::malformed(
                section,
                None,
                n,
                f!("2-D tables have exactly one level, found {n_levels}"),
            )),
            _ => Ok(n_levels),
        }
    }

    /// One row per level, `n_points n_triangles n_hull_points [coordinate]`
    fn parse_level_sizes(
        &mut self,
        dimension: Dimension,
        n_levels: usize,
    ) -> Result<Vec<LevelSizes>> {
        let section = Section::Levels;
        self.scanner.skip_to_marker(section.marker())?;

        let expected = match dimension {
            Dimension::Two => 3,
            Dimension::Three => 4,
        };

        // declared counts are untrusted until the rows are actually read
        let mut sizes = Vec::new();
        for level in 0..n_levels {
            let (n, line) = self.next_value_line(section, Some(level))?;
            let malformed = |reason: String| Error::malformed(section, Some(level), n, reason);

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != expected {
                return Err(malformed(f!(
                    "expected {expected} values for a {}-D table, found {} in \"{}\"",
                    dimension.value(),
                    tokens.len(),
                    line.trim()
                )));
            }

            let mut counts = [0; 3];
            for (count, (token, name)) in counts
                .iter_mut()
                .zip(tokens.iter().zip(["points", "triangles", "hull points"]))
            {
                *count = parse_index(token).ok_or_else(|| {
                    malformed(f!("unable to parse number of {name} from \"{token}\""))
                })?;
                if *count == 0 {
                    return Err(malformed(f!("number of {name} must be non-zero")));
                }
            }

            let coordinate = match tokens.get(3) {
                Some(token) => parse_value(token).ok_or_else(|| {
                    malformed(f!("unable to parse level coordinate from \"{token}\""))
                })?,
                None => 0.0,
            };

            sizes.push(LevelSizes {
                n_points: counts[0],
                n_triangles: counts[1],
                n_hull_points: counts[2],
                coordinate,
            });
        }

        // downstream consumers binary search the levels
        let coordinates: Vec<f64> = sizes.iter().map(|s| s.coordinate).collect();
        if !coordinates.monotonicity().is_strict() {
            return Err(Error::malformed(
                section,
                None,
                self.scanner.line_number(),
                f!("level coordinates must be strictly monotonic, found {coordinates:?}"),
            ));
        }

        Ok(sizes)
    }

    /// Variable count followed by one name per line
    fn parse_variables(&mut self) -> Result<Vec<String>> {
        let section = Section::Variables;
        let (n, line) = self.read_single(section)?;

        let n_variables = match parse_index(line.trim()) {
            Some(0) => Err(Error::malformed(
                section,
                None,
                n,
                "number of variables must be non-zero",
            )),
            Some(n_variables) => Ok(n_variables),
            None => Err(Error::malformed(
                section,
                None,
                n,
                f!("expected a variable count, found \"{}\"", line.trim()),
            )),
        }?;

        let mut entries: Vec<(usize, String)> = Vec::new();
        while entries.len() < n_variables {
            let line = self.scanner.next_content_line()?;
            let n = self.scanner.line_number();
            let short = || {
                Error::malformed(
                    section,
                    None,
                    n,
                    f!("expected {n_variables} names, found {}", entries.len()),
                )
            };

            let line = match line {
                Some(line) if !is_marker(&line) => line,
                _ => return Err(short()),
            };

            let name = parse_variable_name(&line).ok_or_else(|| {
                Error::malformed(
                    section,
                    None,
                    n,
                    f!("unable to parse variable name from \"{}\"", line.trim()),
                )
            })?;
            entries.push((n, name.to_string()));
        }

        // names address data rows, so they have to be unique
        if let Some((line, name)) = entries.iter().duplicates_by(|(_, name)| name.clone()).next() {
            return Err(Error::DuplicateVariable {
                name: name.clone(),
                line: *line,
            });
        }

        Ok(entries.into_iter().map(|(_, name)| name).collect())
    }
}
