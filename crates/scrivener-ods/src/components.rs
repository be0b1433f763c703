//! Static ODF document components
//!
//! The fixed XML surrounding the generated tables: package mimetype,
//! manifest, document styles, metadata, and the two document templates
//! (packaged `content.xml` and the single-file flat form). Only the
//! automatic-styles block and the table list vary per document; everything
//! else is constant.

/// Exact mimetype content of the .ods package.
pub const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";

/// META-INF/manifest.xml for the .ods package.
pub const MANIFEST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
 <manifest:file-entry manifest:full-path="/" manifest:version="1.2" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet"/>
 <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
 <manifest:file-entry manifest:full-path="styles.xml" manifest:media-type="text/xml"/>
 <manifest:file-entry manifest:full-path="meta.xml" manifest:media-type="text/xml"/>
</manifest:manifest>
"#;

/// Generator stanza shared by meta.xml and the flat document.
const OFFICE_META: &str = "<meta:generator>scrivener</meta:generator>";

/// Document styles shared by styles.xml and the flat document: the fixed
/// time number-format referenced by the `cTime` cell style.
const OFFICE_STYLES: &str = r#"<number:time-style style:name="TimeFormat" number:format-source="fixed">
 <number:hours number:style="long"/>
 <number:text>:</number:text>
 <number:minutes number:style="long"/>
 <number:text>:</number:text>
 <number:seconds number:style="long"/>
</number:time-style>"#;

/// Shared automatic styles: the table style plus the cell styles the
/// encoder hands out. Per-column width styles generated at finalize are
/// appended after this block.
pub const AUTOMATIC_STYLES: &str = r#"<style:style style:name="ta1" style:family="table">
 <style:table-properties table:display="true" style:writing-mode="lr-tb"/>
</style:style>
<number:date-style style:name="DateISO" number:automatic-order="true">
 <number:year number:style="long"/>
 <number:text>-</number:text>
 <number:month number:style="long"/>
 <number:text>-</number:text>
 <number:day number:style="long"/>
</number:date-style>
<number:boolean-style style:name="Bool">
 <number:boolean/>
</number:boolean-style>
<style:style style:name="cDateISO" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="DateISO"/>
<style:style style:name="cTime" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="TimeFormat"/>
<style:style style:name="cBool" style:family="table-cell" style:parent-style-name="Default" style:data-style-name="Bool"/>
<style:style style:name="cWrap" style:family="table-cell" style:parent-style-name="Default">
 <style:table-cell-properties fo:wrap-option="wrap"/>
</style:style>
<style:style style:name="cBold" style:family="table-cell" style:parent-style-name="Default">
 <style:text-properties fo:font-weight="bold" style:font-weight-asian="bold" style:font-weight-complex="bold"/>
</style:style>"#;

/// Namespace declarations for the content/flat document roots.
const DOCUMENT_NAMESPACES: &str = r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:calcext="urn:org:documentfoundation:names:experimental:calc:xmlns:calcext:1.0" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" xmlns:of="urn:oasis:names:tc:opendocument:xmlns:of:1.2" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:xlink="http://www.w3.org/1999/xlink" office:version="1.2""#;

/// styles.xml for the .ods package.
pub fn styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" office:version="1.2">
 <office:styles>
{OFFICE_STYLES}
 </office:styles>
</office:document-styles>
"#
    )
}

/// meta.xml for the .ods package.
pub fn meta_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0" office:version="1.2">
 <office:meta>
{OFFICE_META}
 </office:meta>
</office:document-meta>
"#
    )
}

/// content.xml for the .ods package, around the generated automatic styles
/// and table elements.
pub fn content_xml(automatic_styles: &str, tables: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content {DOCUMENT_NAMESPACES}>
 <office:automatic-styles>
{automatic_styles}
 </office:automatic-styles>
 <office:body>
  <office:spreadsheet>
{tables}
  </office:spreadsheet>
 </office:body>
</office:document-content>
"#
    )
}

/// The whole single-file flat (.fods) document: metadata, styles, automatic
/// styles, and body combined under one root, no zip container.
pub fn fods_xml(automatic_styles: &str, tables: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document {DOCUMENT_NAMESPACES} office:mimetype="application/vnd.oasis.opendocument.spreadsheet">
 <office:meta>
{OFFICE_META}
 </office:meta>
 <office:styles>
{OFFICE_STYLES}
 </office:styles>
 <office:automatic-styles>
{automatic_styles}
 </office:automatic-styles>
 <office:body>
  <office:spreadsheet>
{tables}
  </office:spreadsheet>
 </office:body>
</office:document>
"#
    )
}
