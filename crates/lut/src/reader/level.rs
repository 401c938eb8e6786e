// internal
use super::header::LevelSizes;
use super::lut::Pass;
use crate::error::{Error, Result};
use crate::reader::parsers::{parse_index, parse_value};
use crate::section::{Block, Section};
use crate::table::Level;

// lutools modules
use lutools_utils::f;

// external
use log::{debug, trace};
use nalgebra::DMatrix;
use std::io::BufRead;

// ! Per-level blocks
impl<R: BufRead> Pass<'_, R> {
    pub(super) fn parse_level(
        &mut self,
        index: usize,
        sizes: &LevelSizes,
        n_variables: usize,
    ) -> Result<Level> {
        debug!("---------------------");
        debug!(" Parsing level {index:<5} ");
        debug!("---------------------");

        let data = self.parse_data(index, sizes, n_variables)?;
        trace!("Data shape     = {:?}", data.shape());

        let triangles = self.parse_triangles(index, sizes)?;
        trace!("Triangles      = {}", triangles.len());

        let hull = self.parse_hull(index, sizes)?;
        trace!("Hull           = {hull:?}");

        Ok(Level {
            index,
            coordinate: sizes.coordinate,
            data,
            triangles,
            hull,
        })
    }

    /// One row per variable, one column per point
    fn parse_data(
        &mut self,
        level: usize,
        sizes: &LevelSizes,
        n_variables: usize,
    ) -> Result<DMatrix<f64>> {
        let section = Section::Data;
        let rows = self.read_block(Block::Data)?;
        if rows.len() != n_variables {
            return Err(Error::malformed(
                section,
                Some(level),
                self.scanner.line_number(),
                f!("expected {n_variables} rows (one per variable), found {}", rows.len()),
            ));
        }

        let mut values = Vec::new();
        for (n, line) in &rows {
            let row = parse_row(section, level, *n, line, sizes.n_points, parse_value)?;
            values.extend(row);
        }

        Ok(DMatrix::from_row_slice(n_variables, sizes.n_points, &values))
    }

    /// One row of three point indices per triangle
    fn parse_triangles(&mut self, level: usize, sizes: &LevelSizes) -> Result<Vec<[usize; 3]>> {
        let section = Section::Triangles;
        let rows = self.read_block(Block::Triangles)?;
        if rows.len() != sizes.n_triangles {
            return Err(Error::malformed(
                section,
                Some(level),
                self.scanner.line_number(),
                f!("expected {} triangles, found {}", sizes.n_triangles, rows.len()),
            ));
        }

        let mut triangles = Vec::with_capacity(sizes.n_triangles);
        for (i, (n, line)) in rows.iter().enumerate() {
            let row = parse_row(section, level, *n, line, 3, parse_index)?;
            for &point in &row {
                check_bounds(section, level, *n, &f!("triangle {i}"), point, sizes.n_points)?;
            }
            triangles.push([row[0], row[1], row[2]]);
        }

        Ok(triangles)
    }

    /// Boundary point indices, any number per line
    fn parse_hull(&mut self, level: usize, sizes: &LevelSizes) -> Result<Vec<usize>> {
        let section = Section::Hull;
        let rows = self.read_block(Block::Hull)?;

        let mut hull = Vec::new();
        for (n, line) in &rows {
            for token in line.split_whitespace() {
                let point = parse_index(token).ok_or_else(|| {
                    Error::malformed(
                        section,
                        Some(level),
                        *n,
                        f!("unable to parse point index from \"{token}\""),
                    )
                })?;
                check_bounds(section, level, *n, "hull", point, sizes.n_points)?;
                hull.push(point);
            }
        }

        if hull.len() != sizes.n_hull_points {
            return Err(Error::malformed(
                section,
                Some(level),
                self.scanner.line_number(),
                f!("expected {} hull points, found {}", sizes.n_hull_points, hull.len()),
            ));
        }

        Ok(hull)
    }
}

/// Parse exactly `expected` tokens from a line
fn parse_row<T>(
    section: Section,
    level: usize,
    n: usize,
    line: &str,
    expected: usize,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(Error::malformed(
            section,
            Some(level),
            n,
            f!("expected {expected} values, found {}", tokens.len()),
        ));
    }

    tokens
        .into_iter()
        .map(|token| {
            parse(token).ok_or_else(|| {
                Error::malformed(
                    section,
                    Some(level),
                    n,
                    f!("unable to parse \"{token}\""),
                )
            })
        })
        .collect()
}

/// Point indices must address a point of the same level
fn check_bounds(
    section: Section,
    level: usize,
    n: usize,
    owner: &str,
    point: usize,
    n_points: usize,
) -> Result<()> {
    if point >= n_points {
        return Err(Error::malformed(
            section,
            Some(level),
            n,
            f!("{owner} references point {point}, but the level only has {n_points} points"),
        ));
    }
    Ok(())
}
