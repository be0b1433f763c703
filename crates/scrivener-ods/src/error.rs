//! ODS writer error types

use thiserror::Error;

/// Result type for ODS writer operations
pub type OdsResult<T> = std::result::Result<T, OdsError>;

/// Errors that can occur while writing an ODS/FODS document
#[derive(Debug, Error)]
pub enum OdsError {
    /// IO error from the underlying sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error from the package container
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Core error (row shape, value model)
    #[error("Core error: {0}")]
    Core(#[from] scrivener_core::Error),

    /// Formula tokenization error, converted so callers can build formulas
    /// and write rows under one result type
    #[error("Formula error: {0}")]
    Formula(#[from] scrivener_formula::FormulaError),
}
