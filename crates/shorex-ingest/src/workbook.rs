//! In-memory workbook access.
//!
//! The pipeline receives a fully buffered byte blob and never touches the
//! filesystem or network itself. This module wraps the xlsx reader behind the
//! two operations the pipeline needs: probing whether a named sheet reads
//! cleanly, and pulling a sheet as an untyped grid.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::{ParseError, Result};

/// A sheet read with no header interpretation: rows of raw cells.
pub type Grid = Vec<Vec<Data>>;

pub struct WorkbookBuffer {
    inner: Xlsx<Cursor<Vec<u8>>>,
}

impl WorkbookBuffer {
    /// Open a workbook from its raw bytes.
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let inner = Xlsx::new(Cursor::new(bytes.to_vec())).map_err(|e| ParseError::Workbook {
            message: e.to_string(),
        })?;
        Ok(Self { inner })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// True when the named sheet exists and reads without error.
    pub fn probe(&mut self, name: &str) -> bool {
        self.inner.worksheet_range(name).is_ok()
    }

    /// Read a sheet as an untyped grid.
    ///
    /// The grid is the sheet's used range: rectangular, with genuinely empty
    /// cells as [`Data::Empty`].
    pub fn grid(&mut self, name: &str) -> Result<Grid> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| ParseError::Workbook {
                message: e.to_string(),
            })?;
        Ok(range.rows().map(<[Data]>::to_vec).collect())
    }
}
