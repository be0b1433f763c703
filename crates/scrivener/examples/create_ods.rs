//! Example: Create an .ods and an .fods file with typed cells and formulas

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use scrivener::prelude::*;
use std::str::FromStr;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Package form (.ods)
    let mut writer = OdsWriter::create("/tmp/test.ods")?;

    let inventory = writer.new_sheet(Some("Inventory"), Some(3), true);
    writer.sheet_mut(inventory).write_row(&[
        "Item".into(),
        "Count".into(),
        "Unit price".into(),
    ])?;
    writer.sheet_mut(inventory).write_row(&[
        "Paper\n(A4, recycled)".into(),
        1200.into(),
        Decimal::from_str("0.035")?.into(),
    ])?;
    writer.sheet_mut(inventory).write_row(&[
        "Ink".into(),
        3.into(),
        Decimal::from_str("12.90")?.into(),
    ])?;

    let log = writer.new_sheet(Some("Log"), None, false);
    writer.sheet_mut(log).write_row(&[
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().into(),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap().into(),
        true.into(),
        Formula::new("IF(A1=2,B1,C1)")?.into(),
    ])?;

    writer.close()?;
    println!("Created /tmp/test.ods");

    // Flat form (.fods): same API, single XML file.
    let mut flat = FodsWriter::create("/tmp/test.fods")?;
    flat.write_rows(vec![
        vec![CellValue::from("a"), CellValue::from(1)],
        vec![CellValue::from("b"), CellValue::from(2)],
        vec![
            CellValue::from("sum"),
            Formula::new("SUM(B1:B2)")?.into(),
        ],
    ])?;
    flat.close()?;
    println!("Created /tmp/test.fods");

    Ok(())
}
