//! Prelude module - common imports for scrivener users
//!
//! ```rust
//! use scrivener::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    // Error types
    Error,
    FodsWriter,
    // Formula types
    Formula,
    FormulaError,
    OdsError,
    OdsResult,
    // Writer types
    OdsWriter,
    Result,
    Sheet,
    SheetId,
};
