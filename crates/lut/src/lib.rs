//! Lookup table loading for tabulated fluid properties
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod section;
mod table;
mod version;

pub mod reader;

// inline the important table-related modules for a nice public API
#[doc(inline)]
pub use reader::{read_lut, read_lut_with_version, LutReader};

#[doc(inline)]
pub use table::{Dimension, Level, Table};

#[doc(inline)]
pub use section::Section;

#[doc(inline)]
pub use version::{compare_versions, VersionCheck, VersionMismatch, LUT_READER_VERSION};

#[doc(inline)]
pub use error::{Error, Result};
