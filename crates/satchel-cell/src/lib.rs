//! Compute-once memoizing value cell.
//!
//! # Example
//!
//! ```
//! use satchel_cell::MemoCell;
//!
//! let mut cell = MemoCell::new(|| "expensive".to_string());
//! assert!(!cell.is_filled());
//! assert_eq!(cell.get(), "expensive");
//!
//! cell.set("override".to_string());
//! assert_eq!(cell.get(), "override");
//! ```

pub use cell::MemoCell;

mod cell;
