//! Package (.ods) and flat (.fods) writers
//!
//! Both writers share the in-memory [`Document`] and differ only in the
//! container: [`OdsWriter`] drives a zip archive, [`FodsWriter`] emits one
//! XML document. The sink is acquired on construction and released on every
//! exit path: explicitly via `close`, or best-effort on drop. Only an
//! explicit `close` reports serialization failures.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use scrivener_core::CellValue;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::components;
use crate::document::{Document, SheetId};
use crate::error::OdsResult;
use crate::sheet::Sheet;

/// Writer for the packaged .ods form.
///
/// The static package entries (mimetype, manifest, styles, meta) are written
/// when the writer is constructed; `content.xml` is rendered from the
/// document tree when the writer is closed.
///
/// # Example
/// ```rust,no_run
/// use scrivener_ods::OdsWriter;
///
/// let mut writer = OdsWriter::create("out.ods")?;
/// writer.write_row(&["name".into(), "count".into()])?;
/// writer.write_row(&["ada".into(), 42.into()])?;
/// writer.close()?;
/// # Ok::<(), scrivener_ods::OdsError>(())
/// ```
pub struct OdsWriter<W: Write + Seek> {
    document: Document,
    zip: Option<zip::ZipWriter<W>>,
}

impl OdsWriter<File> {
    /// Create a .ods file at the given path.
    pub fn create<P: AsRef<Path>>(path: P) -> OdsResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write + Seek> OdsWriter<W> {
    /// Start a package over an arbitrary sink.
    pub fn new(sink: W) -> OdsResult<Self> {
        let mut zip = zip::ZipWriter::new(sink);

        // The mimetype entry is stored uncompressed so consumers can sniff
        // it from the raw bytes.
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file("mimetype", stored)?;
        zip.write_all(components::MIMETYPE.as_bytes())?;

        let options = SimpleFileOptions::default();
        zip.start_file("META-INF/manifest.xml", options)?;
        zip.write_all(components::MANIFEST_XML.as_bytes())?;
        zip.start_file("styles.xml", options)?;
        zip.write_all(components::styles_xml().as_bytes())?;
        zip.start_file("meta.xml", options)?;
        zip.write_all(components::meta_xml().as_bytes())?;

        Ok(Self {
            document: Document::default(),
            zip: Some(zip),
        })
    }

    /// Create a new sheet and return its handle.
    pub fn new_sheet(
        &mut self,
        name: Option<&str>,
        columns: Option<usize>,
        first_row_bold: bool,
    ) -> SheetId {
        self.document.new_sheet(name, columns, first_row_bold)
    }

    /// Access a sheet for writing.
    ///
    /// # Panics
    /// Panics if `id` came from a different writer.
    pub fn sheet_mut(&mut self, id: SheetId) -> &mut Sheet {
        self.document.sheet_mut(id)
    }

    /// Write a row to the implicit default sheet.
    pub fn write_row(&mut self, cells: &[CellValue]) -> OdsResult<()> {
        Ok(self.document.write_row(cells)?)
    }

    /// Write several rows to the implicit default sheet.
    pub fn write_rows<I, R>(&mut self, rows: I) -> OdsResult<()>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[CellValue]>,
    {
        for row in rows {
            self.write_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Finalize every sheet, write content.xml, and close the archive.
    pub fn close(mut self) -> OdsResult<()> {
        self.finish()
    }

    fn finish(&mut self) -> OdsResult<()> {
        let Some(mut zip) = self.zip.take() else {
            return Ok(());
        };
        zip.start_file("content.xml", SimpleFileOptions::default())?;
        zip.write_all(self.document.content_xml().as_bytes())?;
        zip.finish()?;
        log::debug!("closed .ods package");
        Ok(())
    }
}

impl<W: Write + Seek> Drop for OdsWriter<W> {
    fn drop(&mut self) {
        // Best effort only; a document abandoned mid-write is incomplete
        // either way. Errors are reported through the explicit close path.
        if self.zip.is_some() {
            let _ = self.finish();
        }
    }
}

/// Writer for the single-file flat .fods form.
///
/// Identical document model to [`OdsWriter`]; the whole document is rendered
/// as one XML file on close, with no zip container.
pub struct FodsWriter<W: Write> {
    document: Document,
    sink: Option<W>,
}

impl FodsWriter<File> {
    /// Create a .fods file at the given path.
    pub fn create<P: AsRef<Path>>(path: P) -> OdsResult<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> FodsWriter<W> {
    /// Start a flat document over an arbitrary sink.
    pub fn new(sink: W) -> Self {
        Self {
            document: Document::default(),
            sink: Some(sink),
        }
    }

    /// Create a new sheet and return its handle.
    pub fn new_sheet(
        &mut self,
        name: Option<&str>,
        columns: Option<usize>,
        first_row_bold: bool,
    ) -> SheetId {
        self.document.new_sheet(name, columns, first_row_bold)
    }

    /// Access a sheet for writing.
    ///
    /// # Panics
    /// Panics if `id` came from a different writer.
    pub fn sheet_mut(&mut self, id: SheetId) -> &mut Sheet {
        self.document.sheet_mut(id)
    }

    /// Write a row to the implicit default sheet.
    pub fn write_row(&mut self, cells: &[CellValue]) -> OdsResult<()> {
        Ok(self.document.write_row(cells)?)
    }

    /// Write several rows to the implicit default sheet.
    pub fn write_rows<I, R>(&mut self, rows: I) -> OdsResult<()>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[CellValue]>,
    {
        for row in rows {
            self.write_row(row.as_ref())?;
        }
        Ok(())
    }

    /// Finalize every sheet, render the document, and flush the sink.
    pub fn close(mut self) -> OdsResult<()> {
        self.finish()
    }

    fn finish(&mut self) -> OdsResult<()> {
        let Some(mut sink) = self.sink.take() else {
            return Ok(());
        };
        sink.write_all(self.document.fods_xml().as_bytes())?;
        sink.flush()?;
        log::debug!("closed .fods document");
        Ok(())
    }
}

impl<W: Write> Drop for FodsWriter<W> {
    fn drop(&mut self) {
        if self.sink.is_some() {
            let _ = self.finish();
        }
    }
}
