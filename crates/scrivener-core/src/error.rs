//! Error types for scrivener-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scrivener-core
#[derive(Debug, Error)]
pub enum Error {
    /// A row carried more cells than the sheet's declared column count.
    /// The offending row is rejected whole; nothing is written.
    #[error("row has {cells} cells but the sheet declares {columns} columns")]
    ColumnOverflow { cells: usize, columns: usize },
}
