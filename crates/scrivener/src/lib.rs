//! # scrivener
//!
//! A Rust library for writing OpenDocument Spreadsheets, in both the zipped
//! package form (.ods) and the single-file flat form (.fods), without any
//! office-suite dependency.
//!
//! ## Features
//!
//! - Typed cells: strings, integers, floats, exact decimals, booleans,
//!   dates, datetimes, times, formulas, and empty cells
//! - Formula translation from the familiar dialect (`IF(A1=2,B1,C1)`) to
//!   ODF's `of:=` dialect
//! - Multiple named sheets, written in any interleaving
//! - Declared column counts with padding and overflow rejection
//! - First-row bold styling and automatic column widths
//!
//! ## Example
//!
//! ```rust
//! use scrivener::prelude::*;
//! use std::io::Cursor;
//!
//! let mut writer = OdsWriter::new(Cursor::new(Vec::new()))?;
//!
//! // Simple one-sheet mode: rows go to an implicit default sheet.
//! writer.write_row(&["name".into(), "count".into()])?;
//! writer.write_row(&["ada".into(), 42.into()])?;
//!
//! // Or create named sheets explicitly.
//! let totals = writer.new_sheet(Some("Totals"), Some(2), true);
//! writer.sheet_mut(totals).write_row(&[
//!     "total".into(),
//!     Formula::new("SUM(B1:B2)")?.into(),
//! ])?;
//!
//! writer.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod prelude;

// Re-export core types
pub use scrivener_core::{CellValue, Error, Result};

// Re-export formula types
pub use scrivener_formula::{Formula, FormulaError, FormulaResult};

// Re-export writer types
pub use scrivener_ods::{FodsWriter, OdsError, OdsResult, OdsWriter, Sheet, SheetId};
