//! Static alias tables mapping raw labels to canonical field names.
//!
//! Two vocabularies are maintained: metadata keys (the key/value rows above
//! the table header) and data-column headers. Both are keyed by slug and
//! cover the English and Spanish spellings observed in supplier files. The
//! tables are process-wide constants, built once and shared read-only across
//! concurrent parses.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::slug::slugify;

/// Canonical column: the sign carried by the guide at the meeting point.
pub const SIGN: &str = "Sign";
/// Canonical column: the excursion's local (supplier-facing) name.
pub const EXCURSION: &str = "Excursion local name";
/// Canonical column: language the excursion is guided in.
pub const LANGUAGE: &str = "Language";
/// Canonical column: adult passenger count.
pub const AD: &str = "Ad";
/// Canonical column: arrival or meeting time.
pub const ARRIVAL_TIME: &str = "Arrival / Meeting time";

/// Every column a confirmation table must provide, in canonical order.
pub const CANONICAL_COLUMNS: [&str; 5] = [SIGN, EXCURSION, LANGUAGE, AD, ARRIVAL_TIME];

static METADATA_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("printingdate", "printing_date"),
        ("fechaimpresion", "printing_date"),
        ("fechadeimpresion", "printing_date"),
        ("fechalistado", "printing_date"),
        ("servicedate", "service_date"),
        ("fechaservicio", "service_date"),
        ("fechadeservicio", "service_date"),
        ("supplier", "supplier"),
        ("proveedor", "supplier"),
        ("emergencycontact", "emergency_contact"),
        ("contactodeemergencia", "emergency_contact"),
        ("contactoemergencia", "emergency_contact"),
        ("ship", "ship"),
        ("barco", "ship"),
        ("status", "status"),
        ("state", "status"),
        ("estado", "status"),
        ("terminal", "terminal"),
    ])
});

static COLUMN_ALIASES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    // Each canonical column maps to itself under its own slug, so already
    // canonical headers resolve without a dedicated alias entry.
    let mut map: HashMap<String, &'static str> = CANONICAL_COLUMNS
        .iter()
        .map(|canonical| (slugify(canonical), *canonical))
        .collect();
    for (alias, canonical) in [
        ("cartel", SIGN),
        ("letrero", SIGN),
        ("nombreexcursion", EXCURSION),
        ("excursionnombrelocal", EXCURSION),
        ("idioma", LANGUAGE),
        ("ad", AD),
        ("adultos", AD),
        ("horallegadaencuentro", ARRIVAL_TIME),
    ] {
        map.insert(alias.to_string(), canonical);
    }
    map
});

/// Resolve a raw metadata key to its canonical field name.
///
/// Unknown keys are kept under their own slug rather than dropped, so
/// unrecognized-but-present metadata still reaches the output.
pub fn canonical_metadata_key(raw: &str) -> String {
    let slug = slugify(raw);
    match METADATA_ALIASES.get(slug.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => slug,
    }
}

/// Resolve a raw column header to its canonical name, if it has one.
///
/// Columns without an alias entry are not part of the canonical schema and
/// are ignored downstream.
pub fn canonical_column(raw: &str) -> Option<&'static str> {
    COLUMN_ALIASES.get(&slugify(raw)).copied()
}

/// The metadata alias vocabulary as sorted (alias slug, canonical) pairs.
pub fn metadata_aliases() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = METADATA_ALIASES
        .iter()
        .map(|(alias, canonical)| (*alias, *canonical))
        .collect();
    pairs.sort_unstable();
    pairs
}

/// The column alias vocabulary as sorted (alias slug, canonical) pairs.
pub fn column_aliases() -> Vec<(String, &'static str)> {
    let mut pairs: Vec<_> = COLUMN_ALIASES
        .iter()
        .map(|(alias, canonical)| (alias.clone(), *canonical))
        .collect();
    pairs.sort_unstable();
    pairs
}
