//! Sample directory-to-zip packing.
//!
//! # Architecture
//!
//! - `pack.rs` - Directory scan and archive writing
//! - `report.rs` - Pack result summary
//!
//! This is an illustrative packer, not a general archiver: only
//! lowercase-named files are stored, only first-level lowercase-named
//! subdirectories are visited, and the filter is fixed.

pub use error::{Error, Result};
pub use pack::pack_dir;
pub use report::PackReport;

mod error;
mod pack;
mod report;
