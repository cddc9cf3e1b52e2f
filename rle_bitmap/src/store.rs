//! Fixed-size table of encoded rows.

use crate::{BitmapError, Result};
use rle_codec::RunLengths;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// One [`RunLengths`] per row. Rows are replaced wholesale, never edited.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<RunLengths>,
}

impl RowStore {
    /// Creates `height` rows, each a copy of `blank`.
    pub fn new(height: usize, blank: RunLengths) -> Self {
        Self {
            rows: vec![blank; height],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get_encoded(&self, row: usize) -> Result<&RunLengths> {
        self.rows.get(row).ok_or(BitmapError::RowOutOfRange {
            y: row,
            height: self.rows.len(),
        })
    }

    pub fn set_encoded(&mut self, row: usize, value: RunLengths) -> Result<()> {
        let height = self.rows.len();
        let slot = self
            .rows
            .get_mut(row)
            .ok_or(BitmapError::RowOutOfRange { y: row, height })?;
        *slot = value;
        Ok(())
    }

    /// Bytes held by the stored counts.
    pub fn encoded_bytes(&self) -> usize {
        self.rows.iter().map(|r| r.as_bytes().len()).sum()
    }
}
