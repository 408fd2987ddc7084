//! Sheet resolution: which worksheet holds the confirmation table.

use shorex_model::slugify;
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::workbook::WorkbookBuffer;

/// Exact sheet names tried first, one per supported language.
const SHEET_CANDIDATES: [&str; 2] = ["Supplier Confirmation", "Confirmación proveedor"];

/// Sub-slugs a fallback sheet name must all contain. Deliberately
/// Spanish-only, matching the files this fallback was added for; English
/// sheets are expected to hit the exact candidate list.
const FALLBACK_SLUGS: [&str; 2] = ["confirmacion", "proveedor"];

/// Pick the sheet holding the confirmation table.
///
/// Exact candidates are probed in order; the first that reads cleanly wins.
/// Otherwise the sheet names are scanned in workbook order for one whose slug
/// contains every fallback sub-slug.
pub fn resolve_sheet(workbook: &mut WorkbookBuffer) -> Result<String> {
    for candidate in SHEET_CANDIDATES {
        if workbook.probe(candidate) {
            debug!(sheet = candidate, "matched exact sheet candidate");
            return Ok(candidate.to_string());
        }
    }
    for name in workbook.sheet_names() {
        if fallback_matches(&name) {
            debug!(sheet = %name, "matched fallback sheet heuristic");
            return Ok(name);
        }
    }
    Err(ParseError::SheetNotFound)
}

fn fallback_matches(sheet_name: &str) -> bool {
    let slug = slugify(sheet_name);
    FALLBACK_SLUGS.iter().all(|needle| slug.contains(needle))
}
