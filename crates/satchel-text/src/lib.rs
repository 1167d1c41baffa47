//! Narrow string transforms.
//!
//! # Architecture
//!
//! - `case.rs` - First-letter case transforms
//! - `quote.rs` - One-level quote unescaping
//!
//! These transforms are deliberately narrow. [`capitalize`] touches only the
//! first character, so interior capitals survive (unlike a title-case
//! transform, which lowers the rest). [`unescape`] collapses exactly one
//! level of backslash-escaping of quote characters and nothing else.

pub use case::{capitalize, uncapitalize};
pub use error::{Error, Result};
pub use quote::unescape;

mod case;
mod error;
mod quote;
