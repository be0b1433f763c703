//! In-memory document model
//!
//! The writer owns an arena of sheets; callers hold [`SheetId`] handles into
//! it. This keeps single-owner semantics while letting any number of sheets
//! be interleaved freely before the document is closed.

use scrivener_core::{CellValue, Result};

use crate::components;
use crate::sheet::Sheet;

/// Handle to a sheet in its writer's arena.
///
/// Only valid for the writer that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetId(pub(crate) usize);

/// The whole in-memory spreadsheet, independent of output container.
#[derive(Debug, Default)]
pub(crate) struct Document {
    sheets: Vec<Sheet>,
    default_sheet: Option<SheetId>,
}

impl Document {
    pub(crate) fn new_sheet(
        &mut self,
        name: Option<&str>,
        columns: Option<usize>,
        first_row_bold: bool,
    ) -> SheetId {
        let id = SheetId(self.sheets.len());
        self.sheets.push(Sheet::new(
            name.map(str::to_string),
            columns,
            first_row_bold,
            id.0,
        ));
        id
    }

    pub(crate) fn sheet_mut(&mut self, id: SheetId) -> &mut Sheet {
        &mut self.sheets[id.0]
    }

    /// Write to the implicit default sheet, creating it (unnamed) on first
    /// use.
    pub(crate) fn write_row(&mut self, cells: &[CellValue]) -> Result<()> {
        let id = match self.default_sheet {
            Some(id) => id,
            None => {
                let id = self.new_sheet(None, None, false);
                self.default_sheet = Some(id);
                id
            }
        };
        self.sheet_mut(id).write_row(cells)
    }

    /// Render content.xml for the packaged form.
    pub(crate) fn content_xml(&self) -> String {
        components::content_xml(&self.automatic_styles(), &self.tables())
    }

    /// Render the whole single-file flat document.
    pub(crate) fn fods_xml(&self) -> String {
        components::fods_xml(&self.automatic_styles(), &self.tables())
    }

    fn automatic_styles(&self) -> String {
        let mut out = String::from(components::AUTOMATIC_STYLES);
        out.push('\n');
        for sheet in &self.sheets {
            sheet.column_styles(&mut out);
        }
        out
    }

    fn tables(&self) -> String {
        let mut out = String::new();
        for sheet in &self.sheets {
            sheet.table_xml(&mut out);
        }
        out
    }
}
