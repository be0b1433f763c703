//! Sheets and per-sheet column layout
//!
//! A [`Sheet`] encodes rows as they are written and accumulates layout state
//! (content column count, per-column widths, the one-shot first-row bold
//! flag). At document close the accumulated state drives the emission of the
//! per-column width styles and the `<table:table>` element, with column
//! definitions placed ahead of all row data as ODF requires.

use std::fmt::Write;
use std::mem;

use quick_xml::escape::escape;
use scrivener_core::{CellValue, Error, Result};

use crate::encoder::{encode, POINTS_PER_CHAR};

/// Per-sheet layout accumulator, updated on every row write and read once
/// at finalize.
#[derive(Debug, Default)]
pub(crate) struct ColumnLayout {
    max_columns: usize,
    /// Accumulated width in points, indexed by column
    widths: Vec<u32>,
}

impl ColumnLayout {
    /// Fold one cell's width contribution into the running per-column max.
    pub(crate) fn observe(&mut self, column: usize, width_chars: usize) {
        if self.widths.len() <= column {
            self.widths.resize(column + 1, 0);
        }
        let points = width_chars as u32 * POINTS_PER_CHAR;
        if points > self.widths[column] {
            self.widths[column] = points;
        }
    }

    pub(crate) fn observe_row(&mut self, cells: usize) {
        self.max_columns = self.max_columns.max(cells);
    }

    pub(crate) fn max_columns(&self) -> usize {
        self.max_columns
    }

    pub(crate) fn width(&self, column: usize) -> u32 {
        self.widths.get(column).copied().unwrap_or(0)
    }
}

/// One sheet of the document.
///
/// Created through the writer's `new_sheet`; rows are encoded immediately on
/// [`Sheet::write_row`] and held as markup until the document is closed.
#[derive(Debug)]
pub struct Sheet {
    name: Option<String>,
    columns: Option<usize>,
    first_row_bold: bool,
    layout: ColumnLayout,
    rows: Vec<String>,
    /// Creation-order tag, keeps column style names unique across sheets
    tag: usize,
}

impl Sheet {
    pub(crate) fn new(
        name: Option<String>,
        columns: Option<usize>,
        first_row_bold: bool,
        tag: usize,
    ) -> Self {
        Self {
            name,
            columns,
            first_row_bold,
            layout: ColumnLayout::default(),
            rows: Vec::new(),
            tag,
        }
    }

    /// The sheet name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of rows written so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write one row of cells.
    ///
    /// With a declared column count, a longer row is rejected whole and a
    /// shorter one is right-padded with empty cells. The first-row bold flag
    /// is consumed by the first successful write.
    pub fn write_row(&mut self, cells: &[CellValue]) -> Result<()> {
        if let Some(columns) = self.columns {
            if cells.len() > columns {
                return Err(Error::ColumnOverflow {
                    cells: cells.len(),
                    columns,
                });
            }
        }

        let bold = mem::take(&mut self.first_row_bold);

        let mut row = String::from("<table:table-row>");
        for (column, value) in cells.iter().enumerate() {
            encode(value, &mut self.layout, column, bold).to_xml(&mut row);
        }
        let padded = self.columns.unwrap_or(cells.len());
        for column in cells.len()..padded {
            encode(&CellValue::Empty, &mut self.layout, column, bold).to_xml(&mut row);
        }
        row.push_str("</table:table-row>");

        self.layout.observe_row(padded.max(cells.len()));
        self.rows.push(row);
        Ok(())
    }

    /// Write several rows.
    pub fn write_rows<I, R>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[CellValue]>,
    {
        for row in rows {
            self.write_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Emit the per-column width style definitions for the automatic-styles
    /// section.
    pub(crate) fn column_styles(&self, out: &mut String) {
        for column in 0..self.layout.max_columns() {
            let _ = write!(
                out,
                "<style:style style:name=\"{}\" style:family=\"table-column\">\
                 <style:table-column-properties style:column-width=\"{}pt\" fo:break-before=\"auto\"/>\
                 </style:style>\n",
                self.column_style_name(column),
                self.layout.width(column),
            );
        }
    }

    /// Emit the `<table:table>` element: column definitions first, then the
    /// encoded rows.
    pub(crate) fn table_xml(&self, out: &mut String) {
        out.push_str("<table:table");
        if let Some(name) = &self.name {
            let _ = write!(out, " table:name=\"{}\"", escape(name));
        }
        out.push_str(" table:style-name=\"ta1\">");
        for column in 0..self.layout.max_columns() {
            let _ = write!(
                out,
                "<table:table-column table:style-name=\"{}\" table:default-cell-style-name=\"Default\"/>",
                self.column_style_name(column),
            );
        }
        for row in &self.rows {
            out.push_str(row);
        }
        out.push_str("</table:table>\n");

        log::debug!(
            "finalized sheet {:?}: {} columns, {} rows",
            self.name.as_deref().unwrap_or(""),
            self.layout.max_columns(),
            self.rows.len()
        );
    }

    fn column_style_name(&self, column: usize) -> String {
        format!("co{}c{}", self.tag + 1, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::from(*v)).collect()
    }

    #[test]
    fn test_short_row_is_padded() {
        let mut sheet = Sheet::new(None, Some(3), false, 0);
        sheet.write_row(&cells(&["only"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        // 1 content cell + 2 empty padding cells
        assert_eq!(out.matches("<table:table-cell").count(), 3);
        assert_eq!(out.matches("<table:table-cell/>").count(), 2);
    }

    #[test]
    fn test_long_row_is_rejected_whole() {
        let mut sheet = Sheet::new(None, Some(3), false, 0);
        let err = sheet.write_row(&cells(&["a", "b", "c", "d"])).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnOverflow {
                cells: 4,
                columns: 3
            }
        ));
        assert_eq!(sheet.row_count(), 0);
    }

    #[test]
    fn test_first_row_bold_is_consumed() {
        let mut sheet = Sheet::new(None, None, true, 0);
        sheet.write_row(&cells(&["header"])).unwrap();
        sheet.write_row(&cells(&["data"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        let first = out.find("cBold").expect("first row should be bold");
        assert!(out[first + 1..].find("cBold").is_none());
    }

    #[test]
    fn test_overflow_does_not_consume_bold_flag() {
        let mut sheet = Sheet::new(None, Some(1), true, 0);
        sheet.write_row(&cells(&["a", "b"])).unwrap_err();
        sheet.write_row(&cells(&["header"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        assert!(out.contains("cBold"));
    }

    #[test]
    fn test_column_count_tracks_widest_row() {
        let mut sheet = Sheet::new(None, None, false, 0);
        sheet.write_row(&cells(&["a"])).unwrap();
        sheet.write_row(&cells(&["a", "b", "c"])).unwrap();
        sheet.write_row(&cells(&["a", "b"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        assert_eq!(out.matches("<table:table-column ").count(), 3);
    }

    #[test]
    fn test_column_definitions_precede_rows() {
        let mut sheet = Sheet::new(Some("S".into()), None, false, 0);
        sheet.write_row(&cells(&["a"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        let column = out.find("<table:table-column").unwrap();
        let row = out.find("<table:table-row").unwrap();
        assert!(column < row);
    }

    #[test]
    fn test_column_styles_carry_accumulated_width() {
        let mut sheet = Sheet::new(None, None, false, 0);
        sheet.write_row(&cells(&["four", "a much longer string"])).unwrap();

        let mut styles = String::new();
        sheet.column_styles(&mut styles);
        assert!(styles.contains("style:column-width=\"40pt\""));
        assert!(styles.contains("style:column-width=\"200pt\""));
        assert!(styles.contains("fo:break-before=\"auto\""));
    }

    #[test]
    fn test_style_names_are_unique_per_sheet() {
        let first = Sheet::new(None, None, false, 0);
        let second = Sheet::new(None, None, false, 1);
        assert_ne!(
            first.column_style_name(0),
            second.column_style_name(0)
        );
    }

    #[test]
    fn test_sheet_name_is_escaped() {
        let mut sheet = Sheet::new(Some("Bears & Sloths".into()), None, false, 0);
        sheet.write_row(&cells(&["x"])).unwrap();

        let mut out = String::new();
        sheet.table_xml(&mut out);
        assert!(out.contains("table:name=\"Bears &amp; Sloths\""));
    }
}
