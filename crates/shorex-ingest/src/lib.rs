//! Supplier confirmation parsing pipeline.
//!
//! Converts an in-memory xlsx workbook into a normalized [`Confirmation`]
//! through four ordered stages:
//!
//! 1. **Sheet resolution**: find the worksheet holding the confirmation
//!    table (exact name candidates, then a slug-based fallback scan)
//! 2. **Header location**: scan the first column for the "Sign" marker and
//!    split the sheet into a metadata block and a data block
//! 3. **Canonicalization**: resolve multilingual metadata keys and column
//!    headers to the canonical vocabulary via the static alias tables
//! 4. **Row materialization**: coerce each data row into a typed line item
//!
//! Data flows strictly forward; any stage aborts the whole parse with a
//! single [`ParseError`]. The pipeline is synchronous, performs no I/O of its
//! own, and holds no state across calls, so concurrent parses are safe.
//!
//! # Example
//!
//! ```ignore
//! let bytes = std::fs::read("confirmation.xlsx")?;
//! let confirmation = shorex_ingest::parse_confirmation(&bytes)?;
//! for item in &confirmation.line_items {
//!     println!("{} x{}", item.excursion, item.pax);
//! }
//! ```

mod cell;
mod error;
mod locate;
mod materialize;
mod resolve;
mod workbook;

use tracing::{debug, info};

use shorex_model::Confirmation;

pub use error::{ParseError, Result};

/// Parse a confirmation workbook from its raw bytes.
pub fn parse_confirmation(bytes: &[u8]) -> Result<Confirmation> {
    let mut workbook = workbook::WorkbookBuffer::open(bytes)?;
    let sheet = resolve::resolve_sheet(&mut workbook)?;

    let grid = workbook.grid(&sheet)?;
    let split = locate::locate_header(&grid)?;
    debug!(
        sheet = %sheet,
        header_row = split.header_row,
        columns = split.columns.len(),
        "located confirmation table"
    );

    let general = materialize::build_metadata(&split.metadata);
    let columns = materialize::resolve_columns(&split.columns)?;
    let line_items = materialize::materialize_rows(&split.rows, &columns)?;

    info!(
        sheet = %sheet,
        line_items = line_items.len(),
        metadata_fields = general.len(),
        "parsed supplier confirmation"
    );
    Ok(Confirmation {
        general,
        line_items,
    })
}
