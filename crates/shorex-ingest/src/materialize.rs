//! Canonicalization and row materialization.
//!
//! Takes the split sheet from [`crate::locate`] and produces the typed
//! output: metadata keys and column headers are resolved through the alias
//! tables, then each data row is coerced into a [`LineItem`].

use std::collections::HashMap;

use calamine::Data;
use tracing::trace;

use shorex_model::{
    AD, ARRIVAL_TIME, CANONICAL_COLUMNS, EXCURSION, LANGUAGE, LineItem, Metadata, SERVICE_TYPE_KEY,
    SERVICE_TYPE_SHIP, SIGN, canonical_column, canonical_metadata_key,
};

use crate::cell;
use crate::error::{ParseError, Result};

const EMPTY_CELL: Data = Data::Empty;

/// Canonical column name → position in the data rows.
#[derive(Debug)]
pub struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    fn cell<'a>(&self, row: &'a [Data], column: &str) -> &'a Data {
        self.positions
            .get(column)
            .and_then(|&idx| row.get(idx))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// Build the metadata record from the raw key/value block.
///
/// Keys resolve through the metadata alias table (unknown keys keep their
/// slug); rows with a blank key are separators and skipped. Duplicate
/// canonical keys are last-write-wins by row order. The service-type
/// discriminator is injected unconditionally.
pub fn build_metadata(pairs: &[(Data, Data)]) -> Metadata {
    let mut general = Metadata::new();
    for (key, value) in pairs {
        if cell::is_blank(key) {
            continue;
        }
        let canonical = canonical_metadata_key(cell::text(key).trim());
        general.insert(canonical, normalize_scalar(value));
    }
    general.insert(
        SERVICE_TYPE_KEY.to_string(),
        Some(SERVICE_TYPE_SHIP.to_string()),
    );
    general
}

/// Normalize one metadata scalar: blank/NaN → absent, date-typed → ISO
/// calendar date, anything else → its plain string form.
fn normalize_scalar(value: &Data) -> Option<String> {
    if cell::is_blank(value) {
        return None;
    }
    if let Some(date) = cell::calendar_date(value) {
        return Some(date.format("%Y-%m-%d").to_string());
    }
    Some(cell::text(value))
}

/// Resolve raw header labels to canonical columns and verify the required
/// set is complete.
///
/// Unmapped labels are simply absent from the index (and therefore ignored);
/// when two labels resolve to the same canonical column the leftmost wins.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnIndex> {
    let mut positions = HashMap::new();
    for (idx, raw) in headers.iter().enumerate() {
        if let Some(canonical) = canonical_column(raw) {
            positions.entry(canonical).or_insert(idx);
        }
    }

    let missing: Vec<String> = CANONICAL_COLUMNS
        .iter()
        .filter(|canonical| !positions.contains_key(*canonical))
        .map(|canonical| (*canonical).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingColumns {
            missing,
            found: headers.to_vec(),
        });
    }

    Ok(ColumnIndex { positions })
}

/// Convert the data rows into line items.
///
/// Rows with a blank sign are separators or trailing filler and dropped.
/// A sheet that yields no items at all is a failure, not an empty success.
pub fn materialize_rows(rows: &[Vec<Data>], columns: &ColumnIndex) -> Result<Vec<LineItem>> {
    let mut items = Vec::new();
    for row in rows {
        let sign_cell = columns.cell(row, SIGN);
        if cell::is_blank(sign_cell) {
            continue;
        }
        let sign = cell::text(sign_cell).trim().to_string();
        let pax = parse_pax(columns.cell(row, AD), &sign)?;
        let arrival_time = parse_arrival(columns.cell(row, ARRIVAL_TIME), &sign)?;
        let excursion = cell::text(columns.cell(row, EXCURSION)).trim().to_string();
        let language_cell = columns.cell(row, LANGUAGE);
        let language = if cell::is_blank(language_cell) {
            String::new()
        } else {
            cell::text(language_cell).trim().to_string()
        };
        trace!(sign = %sign, pax, "materialized line item");
        items.push(LineItem {
            sign,
            excursion,
            language,
            pax,
            arrival_time,
        });
    }
    if items.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(items)
}

/// Adult count: blank defaults to 0; anything non-numeric, negative, or
/// fractional is invalid.
fn parse_pax(value: &Data, sign: &str) -> Result<u32> {
    if cell::is_blank(value) {
        return Ok(0);
    }
    let parsed = match value {
        Data::Int(i) => u32::try_from(*i).ok(),
        Data::Float(f)
            if f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX) =>
        {
            Some(*f as u32)
        }
        Data::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ParseError::InvalidValue {
        column: AD.to_string(),
        sign: sign.to_string(),
    })
}

/// Arrival time: absent when blank, verbatim when the cell is already text,
/// otherwise rendered `HH:MM` from the cell's time value.
fn parse_arrival(value: &Data, sign: &str) -> Result<Option<String>> {
    if cell::is_blank(value) {
        return Ok(None);
    }
    if let Data::String(s) = value {
        return Ok(Some(s.clone()));
    }
    match cell::clock_time(value) {
        Some(time) => Ok(Some(time.format("%H:%M").to_string())),
        None => Err(ParseError::InvalidValue {
            column: ARRIVAL_TIME.to_string(),
            sign: sign.to_string(),
        }),
    }
}
