//! Data model for supplier confirmation ingestion.
//!
//! This crate defines the canonical vocabulary and record types shared by the
//! parsing pipeline and its consumers:
//!
//! - **Records**: [`LineItem`], [`Metadata`], and [`Confirmation`] (one parsed
//!   workbook, ready for submission downstream)
//! - **Slugs**: [`slugify`] reduces a raw label to its lookup key
//! - **Alias tables**: multilingual label → canonical field resolution for
//!   metadata keys and table columns

pub mod aliases;
pub mod record;
pub mod slug;

// === Canonical vocabulary ===
pub use aliases::{
    AD, ARRIVAL_TIME, CANONICAL_COLUMNS, EXCURSION, LANGUAGE, SIGN, canonical_column,
    canonical_metadata_key, column_aliases, metadata_aliases,
};

// === Records ===
pub use record::{Confirmation, LineItem, Metadata, SERVICE_TYPE_KEY, SERVICE_TYPE_SHIP};

// === Slugs ===
pub use slug::slugify;
