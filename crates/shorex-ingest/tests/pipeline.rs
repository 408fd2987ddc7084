//! End-to-end pipeline tests over in-memory workbooks.
//!
//! Fixtures are built with `rust_xlsxwriter` and handed to the parser as raw
//! bytes, exercising the same path real uploads take.

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use shorex_ingest::{ParseError, parse_confirmation};

const SPANISH_HEADERS: [&str; 5] = [
    "Cartel",
    "Nombre excursion",
    "Idioma",
    "Ad",
    "Hora llegada encuentro",
];

const ENGLISH_HEADERS: [&str; 5] = [
    "Sign",
    "Excursion local name",
    "Language",
    "Ad",
    "Arrival / Meeting time",
];

fn write_strings(ws: &mut Worksheet, row: u32, cells: &[&str]) -> Result<(), XlsxError> {
    for (col, value) in cells.iter().enumerate() {
        ws.write_string(row, col as u16, *value)?;
    }
    Ok(())
}

/// Minimal valid confirmation sheet: title, two metadata rows, header, one
/// data row with the given sign.
fn write_confirmation(ws: &mut Worksheet, headers: [&str; 5], sign: &str) -> Result<(), XlsxError> {
    ws.write_string(0, 0, "Confirmation listing")?;
    write_strings(ws, 1, &["Barco", "MS Example"])?;
    write_strings(ws, 2, &["Fecha de servicio", "2024-05-01"])?;
    write_strings(ws, 3, &headers)?;
    write_strings(ws, 4, &[sign, "City Tour", "EN"])?;
    ws.write_number(4, 3, 4.0)?;
    ws.write_string(4, 4, "09:30")?;
    Ok(())
}

fn single_sheet(name: &str, headers: [&str; 5], sign: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(name).unwrap();
    write_confirmation(ws, headers, sign).unwrap();
    workbook.save_to_buffer().unwrap()
}

#[test]
fn spanish_end_to_end() {
    let bytes = single_sheet("Supplier Confirmation", SPANISH_HEADERS, "101");
    let confirmation = parse_confirmation(&bytes).unwrap();

    assert_eq!(confirmation.general.get("ship"), Some("MS Example"));
    assert_eq!(confirmation.general.get("service_date"), Some("2024-05-01"));
    assert_eq!(confirmation.general.get("type_servicio"), Some("barco"));

    assert_eq!(confirmation.line_items.len(), 1);
    let item = &confirmation.line_items[0];
    assert_eq!(item.sign, "101");
    assert_eq!(item.excursion, "City Tour");
    assert_eq!(item.language, "EN");
    assert_eq!(item.pax, 4);
    assert_eq!(item.arrival_time.as_deref(), Some("09:30"));
}

#[test]
fn order_batch_carries_metadata_into_each_item() {
    let bytes = single_sheet("Supplier Confirmation", ENGLISH_HEADERS, "101");
    let confirmation = parse_confirmation(&bytes).unwrap();
    let batch = confirmation.order_batch().unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0]["sign"], "101");
    assert_eq!(batch[0]["ship"], "MS Example");
    assert_eq!(batch[0]["type_servicio"], "barco");
}

#[test]
fn spanish_exact_sheet_name_resolves() {
    let bytes = single_sheet("Confirmación proveedor", ENGLISH_HEADERS, "101");
    assert!(parse_confirmation(&bytes).is_ok());
}

#[test]
fn exact_candidate_wins_over_fallback_match() {
    // The fallback-matching sheet comes first in workbook order; the exact
    // candidate must still win.
    let mut workbook = Workbook::new();
    let decoy = workbook.add_worksheet();
    decoy.set_name("Confirmacion proveedor v2").unwrap();
    write_confirmation(decoy, ENGLISH_HEADERS, "999").unwrap();
    let target = workbook.add_worksheet();
    target.set_name("Supplier Confirmation").unwrap();
    write_confirmation(target, ENGLISH_HEADERS, "101").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let confirmation = parse_confirmation(&bytes).unwrap();
    assert_eq!(confirmation.line_items[0].sign, "101");
}

#[test]
fn fallback_resolves_spanish_slug_variant() {
    let bytes = single_sheet("Confirmación del proveedor", ENGLISH_HEADERS, "101");
    assert!(parse_confirmation(&bytes).is_ok());
}

#[test]
fn unrelated_sheet_names_fail() {
    let bytes = single_sheet("Itinerary", ENGLISH_HEADERS, "101");
    assert!(matches!(
        parse_confirmation(&bytes),
        Err(ParseError::SheetNotFound)
    ));
}

#[test]
fn missing_sign_marker_fails() {
    // Spanish header aliases are fine for columns, but the header locator
    // needs the literal "Sign" marker in the first column.
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &["Cartel", "Nombre excursion"]).unwrap();
    write_strings(ws, 2, &["101", "City Tour"]).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert!(matches!(
        parse_confirmation(&bytes),
        Err(ParseError::HeaderNotFound)
    ));
}

#[test]
fn renamed_ad_column_reports_missing() {
    let headers = [
        "Sign",
        "Excursion local name",
        "Language",
        "Pax count",
        "Arrival / Meeting time",
    ];
    let bytes = single_sheet("Supplier Confirmation", headers, "101");
    match parse_confirmation(&bytes) {
        Err(ParseError::MissingColumns { missing, found }) => {
            assert_eq!(missing, vec!["Ad".to_string()]);
            assert!(found.contains(&"Pax count".to_string()));
            assert!(found.contains(&"Sign".to_string()));
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn blank_ad_defaults_to_zero_and_blank_arrival_to_null() {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &ENGLISH_HEADERS).unwrap();
    write_strings(ws, 2, &["102", "Beach Break"]).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let confirmation = parse_confirmation(&bytes).unwrap();
    let item = &confirmation.line_items[0];
    assert_eq!(item.pax, 0);
    assert_eq!(item.language, "");
    assert_eq!(item.arrival_time, None);
}

#[test]
fn textual_ad_fails_naming_the_sign() {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &ENGLISH_HEADERS).unwrap();
    write_strings(ws, 2, &["103", "City Tour", "EN", "many", "09:30"]).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    match parse_confirmation(&bytes) {
        Err(ParseError::InvalidValue { column, sign }) => {
            assert_eq!(column, "Ad");
            assert_eq!(sign, "103");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn template_with_headers_but_no_signs_is_empty_result() {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &ENGLISH_HEADERS).unwrap();
    // Rows exist but every Sign cell is blank.
    ws.write_string(2, 1, "City Tour").unwrap();
    ws.write_string(3, 1, "Beach Break").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert!(matches!(
        parse_confirmation(&bytes),
        Err(ParseError::EmptyResult)
    ));
}

#[test]
fn date_and_time_typed_cells_normalize() {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm");

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    ws.write_string(1, 0, "Service Date").unwrap();
    ws.write_datetime_with_format(
        1,
        1,
        &ExcelDateTime::from_ymd(2024, 5, 1).unwrap(),
        &date_format,
    )
    .unwrap();
    write_strings(ws, 2, &ENGLISH_HEADERS).unwrap();
    // Numeric sign cell, date-typed arrival cell.
    ws.write_number(3, 0, 101.0).unwrap();
    ws.write_string(3, 1, "City Tour").unwrap();
    ws.write_string(3, 2, "EN").unwrap();
    ws.write_number(3, 3, 4.0).unwrap();
    ws.write_datetime_with_format(
        3,
        4,
        &ExcelDateTime::from_hms(9, 30, 0.0).unwrap(),
        &time_format,
    )
    .unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let confirmation = parse_confirmation(&bytes).unwrap();
    assert_eq!(confirmation.general.get("service_date"), Some("2024-05-01"));
    let item = &confirmation.line_items[0];
    assert_eq!(item.sign, "101");
    assert_eq!(item.arrival_time.as_deref(), Some("09:30"));
}

#[test]
fn metadata_nan_and_blank_values_are_null() {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &["Status", "nan"]).unwrap();
    ws.write_string(2, 0, "Terminal").unwrap(); // value cell left blank
    write_strings(ws, 3, &["Pier Number", "4"]).unwrap();
    write_strings(ws, 4, &ENGLISH_HEADERS).unwrap();
    write_strings(ws, 5, &["101", "City Tour", "EN", "4", "09:30"]).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let confirmation = parse_confirmation(&bytes).unwrap();
    assert!(confirmation.general.contains_key("status"));
    assert_eq!(confirmation.general.get("status"), None);
    assert!(confirmation.general.contains_key("terminal"));
    assert_eq!(confirmation.general.get("terminal"), None);
    // Unknown key survives under its slug.
    assert_eq!(confirmation.general.get("piernumber"), Some("4"));
}

#[test]
fn duplicate_metadata_keys_last_write_wins() {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Supplier Confirmation").unwrap();
    ws.write_string(0, 0, "Confirmation listing").unwrap();
    write_strings(ws, 1, &["Ship", "First"]).unwrap();
    write_strings(ws, 2, &["Barco", "Second"]).unwrap();
    write_strings(ws, 3, &ENGLISH_HEADERS).unwrap();
    write_strings(ws, 4, &["101", "City Tour", "EN", "4", "09:30"]).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let confirmation = parse_confirmation(&bytes).unwrap();
    assert_eq!(confirmation.general.get("ship"), Some("Second"));
}

#[test]
fn corrupt_bytes_report_workbook_error() {
    assert!(matches!(
        parse_confirmation(b"this is not a workbook"),
        Err(ParseError::Workbook { .. })
    ));
}
