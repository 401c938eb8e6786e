// crate modules
use crate::version::{compare_versions, VersionCheck, VersionMismatch};

// lutools modules
use lutools_utils::{f, SliceExt, ValueExt};

// external crates
use nalgebra::DMatrix;

/// Number of tabulated coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Single level of scattered points
    Two,
    /// Levels stacked along a third tabulated coordinate
    Three,
}

impl Dimension {
    /// Integer value as written in the table file
    pub fn value(&self) -> u8 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl TryFrom<u64> for Dimension {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(other),
        }
    }
}

/// A single 2-D slice of scattered points
///
/// Every level owns its own triangulation and boundary hull. All point
/// indices are guaranteed to be less than [Level::n_points()].
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub(crate) index: usize,
    pub(crate) coordinate: f64,
    pub(crate) data: DMatrix<f64>,
    pub(crate) triangles: Vec<[usize; 3]>,
    pub(crate) hull: Vec<usize>,
}

impl Level {
    /// Position of the level in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the third coordinate, always `0.0` for 2-D tables
    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    /// Number of scattered points
    pub fn n_points(&self) -> usize {
        self.data.ncols()
    }

    /// Number of triangles in the level triangulation
    pub fn n_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Number of points on the level boundary
    pub fn n_hull_points(&self) -> usize {
        self.hull.len()
    }

    /// Data matrix of `n_variables` rows by `n_points` columns
    ///
    /// Row `i` holds variable `i` of the table names for every point, column
    /// `j` holds the full property vector of point `j`.
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Point indices of every triangle
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Ordered point indices of the boundary
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    /// Full property vector of a single point
    pub fn point(&self, j: usize) -> Option<&[f64]> {
        if j >= self.data.ncols() {
            return None;
        }

        // column-major storage, so a column is contiguous
        let n = self.data.nrows();
        self.data.as_slice().get(j * n..(j + 1) * n)
    }
}

/// Multi-level lookup table
///
/// The primary data structure produced by [read_lut()](crate::read_lut).
/// Tables are built once by the reader and are read-only afterwards, so a
/// shared reference can be handed to as many consumers as needed.
///
/// ```rust, no_run
/// # use lutools_lut::read_lut;
/// let table = read_lut("path/to/table.lut").unwrap();
///
/// // Shared across all levels
/// println!("{:?}", table.names());
///
/// // Per-level connectivity
/// let level = table.level(0).unwrap();
/// println!("{} points, {} triangles", level.n_points(), level.n_triangles());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(crate) version_lut: String,
    pub(crate) version_target: String,
    pub(crate) version_reader: String,
    pub(crate) dimension: Dimension,
    pub(crate) names: Vec<String>,
    pub(crate) levels: Vec<Level>,
}

impl Table {
    /// Version declared by the table file
    pub fn version_lut(&self) -> &str {
        &self.version_lut
    }

    /// Version of the reader that loaded the table
    pub fn version_reader(&self) -> &str {
        &self.version_reader
    }

    /// Reader schema version the table file says it was written for
    pub fn version_target(&self) -> &str {
        &self.version_target
    }

    /// How the declared table version compares to the reader version
    pub fn version_check(&self) -> VersionCheck {
        compare_versions(&self.version_lut, &self.version_reader)
    }

    /// Details of any version disagreement, `None` for a match
    pub fn version_mismatch(&self) -> Option<VersionMismatch> {
        VersionMismatch::check(&self.version_lut, &self.version_reader)
    }

    /// Table dimensionality
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of levels, always 1 for 2-D tables
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    /// Number of variables, identical for every level
    pub fn n_variables(&self) -> usize {
        self.names.len()
    }

    /// Variable names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All levels in file order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Find a specific level
    ///
    /// If the level exists it is returned as `Some(&Level)`, otherwise `None`.
    pub fn level(&self, i: usize) -> Option<&Level> {
        self.levels.get(i)
    }

    /// Coordinate values of every level, strictly monotonic for 3-D tables
    pub fn level_values(&self) -> Vec<f64> {
        self.levels.iter().map(Level::coordinate).collect()
    }

    /// Lowest and highest level coordinate of a 3-D table
    pub fn level_range(&self) -> Option<(f64, f64)> {
        if self.dimension == Dimension::Two {
            return None;
        }

        let values = self.level_values();
        Some((values.try_min().ok()?, values.try_max().ok()?))
    }

    /// Row of the data matrices holding `name`
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Values of a named variable for every point of a level
    ///
    /// ```rust, no_run
    /// # use lutools_lut::read_lut;
    /// let table = read_lut("path/to/table.lut").unwrap();
    /// let temperature = table.variable_values(0, "Temperature").unwrap();
    /// ```
    pub fn variable_values(&self, level: usize, name: &str) -> Option<Vec<f64>> {
        let row = self.variable_index(name)?;
        let level = self.level(level)?;
        Some(level.data.row(row).iter().copied().collect())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Table {\n".to_string();
        s += &f!(
            "    version: {} (reader {})\n",
            self.version_lut,
            self.version_reader
        );
        s += &f!("    dimension: {}\n", self.dimension.value());
        s += &f!("    variables: {}\n", self.names.join(", "));
        for level in &self.levels {
            s += &f!(
                "    level {}: {} points, {} triangles, {} hull points",
                level.index,
                level.n_points(),
                level.n_triangles(),
                level.n_hull_points()
            );
            if self.dimension == Dimension::Three {
                s += &f!(" at {}", level.coordinate.sci(5, 2));
            }
            s += "\n";
        }
        s += "}";
        write!(f, "{s}")
    }
}
