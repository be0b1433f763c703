//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while tokenizing a formula
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Formula tokenization error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A parenthesized argument group was never closed
    #[error("Unbalanced parentheses in '{0}'")]
    UnbalancedParens(String),
}
