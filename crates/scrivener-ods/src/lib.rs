//! # scrivener-ods
//!
//! OpenDocument Spreadsheet writer: produces the zipped .ods package form
//! and the single-file flat .fods form from rows of
//! [`CellValue`](scrivener_core::CellValue)s, with no office-suite
//! dependency.
//!
//! ## Example
//!
//! ```rust
//! use scrivener_core::{CellValue, Formula};
//! use scrivener_ods::OdsWriter;
//! use std::io::Cursor;
//!
//! let mut writer = OdsWriter::new(Cursor::new(Vec::new()))?;
//! let sheet = writer.new_sheet(Some("Totals"), Some(3), true);
//! writer.sheet_mut(sheet).write_row(&[
//!     "a".into(),
//!     "b".into(),
//!     "sum".into(),
//! ])?;
//! writer.sheet_mut(sheet).write_row(&[
//!     1.into(),
//!     2.into(),
//!     Formula::new("SUM(A2:B2)").unwrap().into(),
//! ])?;
//! writer.close()?;
//! # Ok::<(), scrivener_ods::OdsError>(())
//! ```

pub mod components;
pub mod document;
mod encoder;
pub mod error;
pub mod sheet;
pub mod writer;

pub use document::SheetId;
pub use error::{OdsError, OdsResult};
pub use sheet::Sheet;
pub use writer::{FodsWriter, OdsWriter};
