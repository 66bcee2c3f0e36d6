//! Aligned text tables
//!
//! A sparse, growable grid of strings addressed by 1-based (row, column).
//! Writing a cell grows the grid as needed, filling gaps with empty strings,
//! and records the widest value ever written to each column. Rendering pads
//! every cell to its column width and terminates it with a tab.

use crate::error::TableError;
use std::collections::HashMap;
use std::fmt::{self, Write as _};
use tracing::trace;

/// Column delimiter appended after every rendered cell.
pub const CELL_DELIMITER: char = '\t';

/// A sparse grid of text cells with per-column widths.
///
/// Plain owned data with no internal synchronization. Sharing one table
/// between threads for writing needs an external lock such as a `Mutex`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    /// Zero-based column index -> widest value seen, in characters
    column_widths: HashMap<usize, usize>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in storage order. Gap rows are empty.
    pub fn data(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the zero-based column `index`; 0 if nothing was written there.
    pub fn column_width(&self, index: usize) -> usize {
        self.column_widths.get(&index).copied().unwrap_or(0)
    }

    /// Write `value` at the 1-based (`row`, `col`) position.
    ///
    /// Both indices must be at least 1; otherwise the table is left untouched
    /// and [`TableError::InvalidIndex`] is returned.
    ///
    /// # Panics
    ///
    /// Growing the grid allocates `row` rows and `col` cells up front, so an
    /// index too large to allocate panics with a capacity overflow.
    pub fn set_data(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        if row < 1 || col < 1 {
            return Err(TableError::InvalidIndex { row, col });
        }

        if row > self.rows.len() {
            trace!(from = self.rows.len(), to = row, "Growing table rows");
            self.rows.resize_with(row, Vec::new);
        }

        let cells = &mut self.rows[row - 1];
        if col > cells.len() {
            cells.resize_with(col, String::new);
        }

        let value = value.into();
        let len = value.chars().count();
        cells[col - 1] = value;

        let width = self.column_widths.entry(col - 1).or_insert(0);
        if len > *width {
            *width = len;
        }

        Ok(())
    }

    /// Write `values` into `row`, starting at column 1.
    ///
    /// Stops at the first failing write. An empty `values` writes nothing.
    pub fn add_row<I, S>(&mut self, row: usize, values: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (i, value) in values.into_iter().enumerate() {
            self.set_data(row, i + 1, value)?;
        }
        Ok(())
    }

    /// Render every row as one line of padded, tab-terminated cells.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let _ = write!(
                    out,
                    "{:<width$}{}",
                    cell,
                    CELL_DELIMITER,
                    width = self.column_width(i)
                );
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
