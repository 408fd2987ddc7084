//! Parsed confirmation records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata field injected into every confirmation to mark its origin.
pub const SERVICE_TYPE_KEY: &str = "type_servicio";
/// Service type for ship-excursion confirmations.
pub const SERVICE_TYPE_SHIP: &str = "barco";

/// One row of the confirmation table, typed and validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Meeting-point sign identifier. Never empty.
    pub sign: String,
    /// Local excursion name.
    pub excursion: String,
    /// Guiding language; empty when the cell was blank.
    pub language: String,
    /// Adult passenger count; blank cells default to 0.
    pub pax: u32,
    /// Arrival/meeting time as `HH:MM`, or the source text verbatim.
    pub arrival_time: Option<String>,
}

/// Sheet-level metadata: canonical field name → normalized scalar.
///
/// Values are already JSON-safe: a plain string, an ISO calendar date
/// string, or `None` for blank/NaN cells. Later rows overwrite earlier ones
/// when two raw keys canonicalize to the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, Option<String>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized field, replacing any earlier value.
    pub fn insert(&mut self, key: String, value: Option<String>) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The full parse result for one workbook: sheet metadata plus the ordered,
/// non-empty list of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub general: Metadata,
    pub line_items: Vec<LineItem>,
}

impl Confirmation {
    /// Flatten the confirmation into the order batch the downstream API
    /// consumes: one JSON object per line item, carrying every metadata
    /// field alongside the item's own fields. Metadata wins on name clashes.
    pub fn order_batch(&self) -> serde_json::Result<Vec<Value>> {
        self.line_items
            .iter()
            .map(|item| {
                let mut order = serde_json::to_value(item)?;
                if let Value::Object(map) = &mut order {
                    for (key, value) in self.general.iter() {
                        let json = match value {
                            Some(text) => Value::String(text.to_string()),
                            None => Value::Null,
                        };
                        map.insert(key.to_string(), json);
                    }
                }
                Ok(order)
            })
            .collect()
    }
}
