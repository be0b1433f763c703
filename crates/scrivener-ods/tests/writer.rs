//! End-to-end writer tests: write a document in memory, read the container
//! back, and assert on the produced XML.

use std::io::{Cursor, Read};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use scrivener_core::{CellValue, Formula};
use scrivener_ods::{FodsWriter, OdsWriter};

type MemWriter<'a> = OdsWriter<&'a mut Cursor<Vec<u8>>>;

fn mem_writer(buffer: &mut Cursor<Vec<u8>>) -> MemWriter<'_> {
    OdsWriter::new(buffer).unwrap()
}

/// Rows exercising every value kind, mirroring the crate's typical input.
fn sample_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec!["String".into(), "ABCDEF123456".into(), "123456".into()],
        vec![
            "Float".into(),
            1.into(),
            123.into(),
            123.123.into(),
            Decimal::from_str("10.321").unwrap().into(),
        ],
        vec![
            "Date/DateTime".into(),
            NaiveDate::from_ymd_opt(1989, 11, 9).unwrap().into(),
        ],
        vec![
            "Time".into(),
            NaiveTime::from_hms_opt(13, 37, 0).unwrap().into(),
            NaiveTime::from_hms_opt(16, 17, 18).unwrap().into(),
        ],
        vec!["Bool".into(), true.into(), false.into(), true.into()],
        vec![
            "Formula".into(),
            1.into(),
            2.into(),
            3.into(),
            Formula::new("IF(A1=2,B1,C1)").unwrap().into(),
        ],
    ]
}

fn archive_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn package_contains_required_entries() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    writer.write_rows(sample_rows()).unwrap();
    writer.close().unwrap();
    let bytes = buffer.into_inner();

    let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
    for name in [
        "mimetype",
        "META-INF/manifest.xml",
        "styles.xml",
        "meta.xml",
        "content.xml",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing entry {name}");
    }

    assert_eq!(
        archive_entry(&bytes, "mimetype"),
        "application/vnd.oasis.opendocument.spreadsheet"
    );

    let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
    let entry = archive.by_name("mimetype").unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
}

#[test]
fn content_carries_typed_cells_and_translated_formula() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    writer.write_rows(sample_rows()).unwrap();
    writer.close().unwrap();
    let content = archive_entry(&buffer.into_inner(), "content.xml");

    assert!(content.contains("office:value-type=\"string\""));
    assert!(content.contains("office:value=\"10.321\""));
    assert!(content.contains("office:boolean-value=\"true\""));
    assert!(content.contains("office:date-value=\"1989-11-09\""));
    assert!(content.contains("office:time-value=\"PT13H37M00S\""));
    assert!(content.contains("table:formula=\"of:=IF([.A1]=2;[.B1];[.C1])\""));
}

#[test]
fn two_named_sheets_appear_in_call_order() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    let bears = writer.new_sheet(Some("Bears"), None, false);
    let sloths = writer.new_sheet(Some("Sloths"), None, false);
    writer
        .sheet_mut(bears)
        .write_row(&["grizzly".into(), "polar".into()])
        .unwrap();
    writer
        .sheet_mut(sloths)
        .write_row(&["three-toed".into()])
        .unwrap();
    // Interleaved writes land on the right sheet.
    writer
        .sheet_mut(bears)
        .write_row(&["sun bear".into()])
        .unwrap();
    writer.close().unwrap();
    let content = archive_entry(&buffer.into_inner(), "content.xml");

    assert_eq!(content.matches("<table:table ").count(), 2);
    let bears_at = content.find("table:name=\"Bears\"").unwrap();
    let sloths_at = content.find("table:name=\"Sloths\"").unwrap();
    assert!(bears_at < sloths_at);
    assert!(content.contains("grizzly"));
    assert!(content.contains("three-toed"));
}

#[test]
fn declared_columns_pad_and_reject() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    let sheet = writer.new_sheet(Some("Narrow"), Some(3), false);
    writer
        .sheet_mut(sheet)
        .write_row(&["alone".into()])
        .unwrap();
    let err = writer
        .sheet_mut(sheet)
        .write_row(&["a".into(), "b".into(), "c".into(), "d".into()])
        .unwrap_err();
    assert!(matches!(
        err,
        scrivener_core::Error::ColumnOverflow {
            cells: 4,
            columns: 3
        }
    ));
    writer.close().unwrap();
    let content = archive_entry(&buffer.into_inner(), "content.xml");

    // One content cell plus two empty padding cells, rejected row absent.
    assert_eq!(content.matches("<table:table-cell").count(), 3);
    assert!(!content.contains(">d<"));
}

#[test]
fn first_row_bold_applies_to_header_only() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    let sheet = writer.new_sheet(Some("Bold"), None, true);
    writer
        .sheet_mut(sheet)
        .write_row(&["h1".into(), "h2".into()])
        .unwrap();
    writer
        .sheet_mut(sheet)
        .write_row(&["d1".into(), "d2".into()])
        .unwrap();
    writer.close().unwrap();
    let content = archive_entry(&buffer.into_inner(), "content.xml");

    assert_eq!(content.matches("table:style-name=\"cBold\"").count(), 2);
}

#[test]
fn column_width_styles_precede_row_data() {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = mem_writer(&mut buffer);
    writer
        .write_row(&["a rather long header cell".into(), "x".into()])
        .unwrap();
    writer.close().unwrap();
    let content = archive_entry(&buffer.into_inner(), "content.xml");

    assert!(content.contains("style:family=\"table-column\""));
    assert!(content.contains("style:column-width=\"250pt\""));
    let column = content.find("<table:table-column ").unwrap();
    let row = content.find("<table:table-row>").unwrap();
    assert!(column < row);
}

#[test]
fn dropped_writer_still_finishes_the_archive() {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = mem_writer(&mut buffer);
        writer.write_row(&["left open".into()]).unwrap();
        // No close: Drop releases the sink best-effort.
    }
    let content = archive_entry(&buffer.into_inner(), "content.xml");
    assert!(content.contains("left open"));
}

#[test]
fn dropped_flat_writer_still_renders_the_document() {
    let mut buffer = Vec::new();
    {
        let mut writer = FodsWriter::new(&mut buffer);
        writer.write_row(&["left open".into()]).unwrap();
        // No close: Drop releases the sink best-effort.
    }
    let content = String::from_utf8(buffer).unwrap();
    assert!(content.contains("<office:document "));
    assert!(content.contains("left open"));
}

#[test]
fn create_writes_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ods");

    let mut writer = OdsWriter::create(&path).unwrap();
    writer.write_rows(sample_rows()).unwrap();
    writer.close().unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn flat_document_is_a_single_xml_file() {
    let mut buffer = Vec::new();
    let mut writer = FodsWriter::new(&mut buffer);
    let bears = writer.new_sheet(Some("Bears"), None, false);
    writer
        .sheet_mut(bears)
        .write_row(&["grizzly".into(), 2.into()])
        .unwrap();
    writer.write_row(&["default sheet row".into()]).unwrap();
    writer.close().unwrap();

    let content = String::from_utf8(buffer).unwrap();
    assert!(content.starts_with("<?xml"));
    assert!(content.contains("<office:document "));
    assert!(content
        .contains("office:mimetype=\"application/vnd.oasis.opendocument.spreadsheet\""));
    // Meta, styles, and body all live in the one document.
    assert!(content.contains("<office:meta>"));
    assert!(content.contains("<number:time-style"));
    assert!(content.contains("table:name=\"Bears\""));
    assert!(content.contains("default sheet row"));
}
