//! # scrivener-core
//!
//! Core value types for the scrivener OpenDocument spreadsheet writer.
//!
//! This crate provides [`CellValue`], the closed set of value kinds a caller
//! can place in a cell, and the core [`Error`] type. The encoding of values
//! into ODF markup lives in `scrivener-ods`.
//!
//! ## Example
//!
//! ```rust
//! use scrivener_core::CellValue;
//!
//! let row: Vec<CellValue> = vec![
//!     "label".into(),
//!     42.into(),
//!     true.into(),
//!     CellValue::Empty,
//! ];
//! assert!(row[3].is_empty());
//! ```

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::CellValue;

// The formula wrapper is part of the value model; re-export it so callers
// can build `CellValue::Formula` without naming the formula crate.
pub use scrivener_formula::{Formula, FormulaError};
