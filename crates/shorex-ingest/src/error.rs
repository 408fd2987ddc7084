//! Error types for confirmation parsing.

use thiserror::Error;

/// Errors raised by the parsing pipeline.
///
/// Every variant is fatal to the current parse and non-retryable without a
/// corrected input file. The pipeline never partially succeeds: callers get
/// either a full confirmation or exactly one of these.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No sheet matched the known candidate names or the fallback scan.
    #[error("supplier confirmation sheet not found")]
    SheetNotFound,

    /// No header row: the first column never contains the "Sign" marker.
    #[error("header row not found: no 'Sign' cell in the first column")]
    HeaderNotFound,

    /// Required canonical columns absent after alias resolution.
    #[error(
        "missing required columns: [{}]; columns found: [{}]",
        missing.join(", "),
        found.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// A per-row scalar could not be coerced; `sign` locates the row.
    #[error("invalid '{column}' value for sign {sign}")]
    InvalidValue { column: String, sign: String },

    /// Structurally valid sheet with zero usable rows.
    #[error("workbook contains no valid line items")]
    EmptyResult,

    /// The workbook bytes could not be read at all.
    #[error("failed to read workbook: {message}")]
    Workbook { message: String },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
