//! Cell encoder
//!
//! Classifies one [`CellValue`] into ODF cell markup: the `office:value-type`
//! attribute, the typed value attribute, the cell style, and the display
//! text. Encoding also feeds the sheet's column layout accumulator so column
//! widths and the column count can be emitted at finalize time.

use quick_xml::escape::escape;
use scrivener_core::CellValue;

use crate::sheet::ColumnLayout;

/// Width multiplier: one character of display text costs this many points.
pub(crate) const POINTS_PER_CHAR: u32 = 10;

/// A wrapped cell whose last line reaches this many characters has its width
/// contribution clamped here, so long wrapped paragraphs do not produce
/// absurdly wide columns.
const WRAP_CLAMP_CHARS: usize = 20;

mod style {
    pub const DATE_ISO: &str = "cDateISO";
    pub const TIME: &str = "cTime";
    pub const BOOL: &str = "cBool";
    pub const WRAP: &str = "cWrap";
    pub const BOLD: &str = "cBold";
}

/// One encoded cell, ready to be serialized into its row element.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct EncodedCell {
    value_type: Option<&'static str>,
    /// Typed value attribute: (attribute name, attribute value)
    value_attr: Option<(&'static str, String)>,
    style_name: Option<&'static str>,
    /// Display text, one entry per paragraph element
    lines: Vec<String>,
    formula: Option<String>,
}

/// Encode one cell.
///
/// The match arms are ordered date -> time -> boolean -> numeric -> formula
/// -> empty -> string. Boolean stays ahead of the numeric arms: the variants
/// make the types unambiguous, but the ordering is part of the contract and
/// must not be "simplified" into a numeric catch-all.
pub(crate) fn encode(
    value: &CellValue,
    layout: &mut ColumnLayout,
    column: usize,
    bold: bool,
) -> EncodedCell {
    let mut cell = EncodedCell::default();

    match value {
        CellValue::Date(d) => {
            let text = d.format("%Y-%m-%d").to_string();
            cell.value_type = Some("date");
            cell.value_attr = Some(("office:date-value", text.clone()));
            cell.style_name = Some(style::DATE_ISO);
            cell.lines.push(text);
            layout.observe(column, 0);
        }
        CellValue::DateTime(dt) => {
            // ISO-8601 with a T separator; fractional seconds only when
            // they are nonzero.
            let text = dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string();
            cell.value_type = Some("date");
            cell.value_attr = Some(("office:date-value", text.clone()));
            cell.style_name = Some(style::DATE_ISO);
            cell.lines.push(text);
            layout.observe(column, 0);
        }
        CellValue::Time(t) => {
            cell.value_type = Some("time");
            cell.value_attr = Some((
                "office:time-value",
                t.format("PT%HH%MM%SS").to_string(),
            ));
            cell.style_name = Some(style::TIME);
            cell.lines.push(t.format("%H:%M:%S").to_string());
            layout.observe(column, 0);
        }
        CellValue::Boolean(b) => {
            cell.value_type = Some("boolean");
            cell.value_attr = Some((
                "office:boolean-value",
                if *b { "true" } else { "false" }.to_string(),
            ));
            cell.style_name = Some(style::BOOL);
            cell.lines.push(if *b { "TRUE" } else { "FALSE" }.to_string());
            layout.observe(column, 0);
        }
        CellValue::Integer(n) => {
            number_cell(&mut cell, n.to_string());
            layout.observe(column, 0);
        }
        CellValue::Float(n) => {
            number_cell(&mut cell, n.to_string());
            layout.observe(column, 0);
        }
        CellValue::Decimal(d) => {
            // Decimal's Display carries the constructed scale, so the text
            // round-trips exactly.
            number_cell(&mut cell, d.to_string());
            layout.observe(column, 0);
        }
        CellValue::Formula(f) => {
            // No value-type and no display text: any shown value is for the
            // consuming application to compute.
            cell.formula = Some(f.to_odf());
            layout.observe(column, 0);
        }
        CellValue::Empty => {
            layout.observe(column, 0);
        }
        CellValue::String(s) => {
            cell.value_type = Some("string");
            string_cell(&mut cell, s, layout, column);
        }
    }

    if bold {
        cell.style_name = Some(style::BOLD);
    }

    cell
}

fn number_cell(cell: &mut EncodedCell, text: String) {
    cell.value_type = Some("float");
    cell.value_attr = Some(("office:value", text.clone()));
    cell.lines.push(text);
}

/// Split text into display lines and record the column width contribution.
///
/// Lines are trimmed individually; a multi-line cell gets the wrap style.
/// Only string cells contribute a nonzero width, so a column stays at the
/// widest string it has seen even when later rows hold numbers.
fn string_cell(cell: &mut EncodedCell, text: &str, layout: &mut ColumnLayout, column: usize) {
    if text.is_empty() {
        layout.observe(column, 0);
        return;
    }

    let lines: Vec<String> = text.split('\n').map(|l| l.trim().to_string()).collect();
    let mut width_chars = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    if lines.len() > 1 {
        cell.style_name = Some(style::WRAP);
        if lines
            .last()
            .is_some_and(|l| l.chars().count() >= WRAP_CLAMP_CHARS)
        {
            width_chars = WRAP_CLAMP_CHARS;
        }
    }

    cell.lines = lines;
    layout.observe(column, width_chars);
}

impl EncodedCell {
    /// Serialize as a `<table:table-cell>` element.
    pub(crate) fn to_xml(&self, out: &mut String) {
        out.push_str("<table:table-cell");
        if let Some(value_type) = self.value_type {
            out.push_str(" office:value-type=\"");
            out.push_str(value_type);
            out.push('"');
        }
        if let Some((name, value)) = &self.value_attr {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        if let Some(formula) = &self.formula {
            out.push_str(" table:formula=\"");
            out.push_str(&escape(formula));
            out.push('"');
        }
        if let Some(style_name) = self.style_name {
            out.push_str(" table:style-name=\"");
            out.push_str(style_name);
            out.push('"');
        }
        if self.lines.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for line in &self.lines {
                out.push_str("<text:p>");
                out.push_str(&escape(line));
                out.push_str("</text:p>");
            }
            out.push_str("</table:table-cell>");
        }
    }
}
