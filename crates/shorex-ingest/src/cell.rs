//! Cell-level coercion helpers.
//!
//! Workbook cells are untyped from the pipeline's point of view: a date may
//! arrive as a real date cell, an ISO string, or free text, and counts may be
//! floats. Each helper here is one step of an explicit, ordered coercion
//! sequence; callers try them in order instead of relying on fallback chains.

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A cell with nothing usable in it: empty, numeric NaN, or text that trims
/// to nothing or to the literal "nan".
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::Float(f) => f.is_nan(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
        }
        _ => false,
    }
}

/// Plain string form of a cell, the last resort of every coercion sequence.
///
/// Integral floats render without a fractional part: Excel stores the sign
/// number `101` as `101.0`, and "101.0" is not a usable sign identifier.
pub fn text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::Error(e) => format!("{e:?}"),
    }
}

fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Interpret a cell as a calendar date, if possible.
///
/// Date-typed cells use the workbook's own calendar; string cells are tried
/// against the formats suppliers actually send.
pub fn calendar_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|datetime| datetime.date()),
        Data::DateTimeIso(s) | Data::String(s) => parse_date_text(s),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Interpret a non-textual cell as a time of day.
///
/// Date/time cells take their time component; bare floats in `[0, 1)` are
/// Excel day fractions (a time-formatted cell read without its format).
pub fn clock_time(cell: &Data) -> Option<NaiveTime> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|datetime| datetime.time()),
        Data::DateTimeIso(s) => parse_time_text(s),
        Data::Float(f) if (0.0..1.0).contains(f) => day_fraction_time(*f),
        _ => None,
    }
}

fn parse_time_text(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    for format in ["%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Some(time);
        }
    }
    None
}

fn day_fraction_time(fraction: f64) -> Option<NaiveTime> {
    let seconds = (fraction * 86_400.0).round() as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds % 86_400, 0)
}
