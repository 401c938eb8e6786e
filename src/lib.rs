//! `lutools` is a small toolkit of fast and reliable readers for tabulated
//! fluid property lookup tables
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use lutools_utils as utils;

#[cfg(feature = "lut")]
#[cfg_attr(docsrs, doc(cfg(feature = "lut")))]
#[doc(inline)]
pub use lutools_lut as lut;
