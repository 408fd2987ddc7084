//! Header location: split a raw sheet into metadata and data blocks.

use calamine::Data;

use crate::cell;
use crate::error::{ParseError, Result};

/// Marker text identifying the header row in the first column.
const HEADER_MARKER: &str = "sign";

/// A sheet split at its header row.
#[derive(Debug)]
pub struct SheetSplit {
    /// Key/value pairs from the rows strictly between row 1 and the header.
    pub metadata: Vec<(Data, Data)>,
    /// Index of the header row within the grid.
    pub header_row: usize,
    /// Raw header labels, trimmed, one per column.
    pub columns: Vec<String>,
    /// Data rows below the header.
    pub rows: Vec<Vec<Data>>,
}

/// Find the header row and split the sheet around it.
///
/// The header is the first row whose first-column cell reads "sign"
/// (case- and whitespace-insensitive). Row 0 is reserved for the sheet title
/// and never treated as metadata; the metadata block is rows `1..header`,
/// restricted to the first two columns.
pub fn locate_header(grid: &[Vec<Data>]) -> Result<SheetSplit> {
    let header_row = grid
        .iter()
        .position(|row| {
            row.first()
                .is_some_and(|c| cell::text(c).trim().eq_ignore_ascii_case(HEADER_MARKER))
        })
        .ok_or(ParseError::HeaderNotFound)?;

    let metadata = if header_row > 1 {
        grid[1..header_row]
            .iter()
            .map(|row| {
                (
                    row.first().cloned().unwrap_or(Data::Empty),
                    row.get(1).cloned().unwrap_or(Data::Empty),
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    let columns = grid[header_row]
        .iter()
        .map(|c| cell::text(c).trim().to_string())
        .collect();
    let rows = grid[header_row + 1..].to_vec();

    Ok(SheetSplit {
        metadata,
        header_row,
        columns,
        rows,
    })
}
