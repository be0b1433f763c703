//! # scrivener-formula
//!
//! Formula tokenizer and ODF translator for the scrivener spreadsheet
//! writer.
//!
//! This crate converts formulas written in the familiar ergonomic dialect
//! (comma-separated arguments, bare cell references) into the `of:=` dialect
//! that OpenDocument spreadsheets expect (semicolon-separated arguments,
//! bracketed dot-prefixed references). It never evaluates anything.
//!
//! ## Example
//!
//! ```rust
//! use scrivener_formula::Formula;
//!
//! let f = Formula::new("SUM(B1:D1)").unwrap();
//! assert_eq!(f.to_odf(), "of:=SUM([.B1:.D1])");
//! ```

pub mod error;
pub mod formula;
pub mod lexer;
pub mod token;

pub use error::{FormulaError, FormulaResult};
pub use formula::Formula;
pub use lexer::tokenize;
pub use token::Token;
