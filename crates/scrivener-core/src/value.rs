//! Cell value types

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use scrivener_formula::Formula;

/// A single cell value as supplied by the caller.
///
/// The encoder matches exhaustively over this enum, so every variant has a
/// defined ODF rendering and the compiler flags any variant added without
/// one. `Boolean` is its own variant rather than a numeric sub-case; the
/// encoder also keeps its boolean arm ahead of the numeric arms so the
/// distinction survives reordering.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell: no attributes, no text
    Empty,

    /// Boolean value, displayed as TRUE/FALSE
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating point value
    Float(f64),

    /// Exact decimal value; serialized with its original textual precision,
    /// never routed through a binary float
    Decimal(Decimal),

    /// Text value (also the fallback for anything without a closer fit)
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Date with a time of day
    DateTime(NaiveDateTime),

    /// Time of day
    Time(NaiveTime),

    /// Spreadsheet formula, tokenized at construction
    Formula(Formula),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Integer(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Decimal(d)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(t: NaiveTime) -> Self {
        CellValue::Time(t)
    }
}

impl From<Formula> for CellValue {
    fn from(f: Formula) -> Self {
        CellValue::Formula(f)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Empty,
        }
    }
}
