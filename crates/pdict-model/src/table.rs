//! Raw table model and span expansion.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Largest column span HTML honours.
pub const MAX_COL_SPAN: usize = 1000;
/// Largest row span HTML honours.
pub const MAX_ROW_SPAN: usize = 65534;

/// One source cell with its declared spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCell {
    pub text: String,
    #[serde(default = "one")]
    pub row_span: usize,
    #[serde(default = "one")]
    pub col_span: usize,
}

fn one() -> usize {
    1
}

impl RawCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            row_span: 1,
            col_span: 1,
        }
    }

    pub fn with_spans(text: impl Into<String>, row_span: usize, col_span: usize) -> Self {
        Self {
            text: text.into(),
            row_span,
            col_span,
        }
    }
}

/// A table as extracted from a page: rows of cells, possibly merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<RawCell>>) -> Self {
        Self { rows }
    }

    /// Builds a span-free table from plain text rows.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(RawCell::new).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Expands row and column spans into a rectangular grid.
    ///
    /// A merged cell is copied into every slot it covers. Spans below one are
    /// treated as one, column spans are capped at [`MAX_COL_SPAN`], row spans
    /// stop at the last source row, and a slot
    /// already claimed by an earlier span is never overwritten. Short rows are
    /// padded with empty cells.
    pub fn expand(&self) -> Grid {
        let height = self.rows.len();
        let mut slots: Vec<Vec<Option<String>>> = vec![Vec::new(); height];

        for (r, row) in self.rows.iter().enumerate() {
            let mut c = 0;
            for cell in row {
                while slots[r].get(c).is_some_and(Option::is_some) {
                    c += 1;
                }
                let row_span = cell.row_span.max(1).min(height - r);
                let col_span = cell.col_span.clamp(1, MAX_COL_SPAN);
                let end = c.saturating_add(col_span);
                for slot_row in slots.iter_mut().skip(r).take(row_span) {
                    for cc in c..end {
                        if slot_row.len() <= cc {
                            slot_row.resize(cc + 1, None);
                        }
                        if slot_row[cc].is_none() {
                            slot_row[cc] = Some(cell.text.clone());
                        }
                    }
                }
                c = end;
            }
        }

        let width = slots.iter().map(Vec::len).max().unwrap_or(0);
        let cells = slots
            .into_iter()
            .map(|row| {
                let mut row: Vec<String> = row.into_iter().map(Option::unwrap_or_default).collect();
                row.resize(width, String::new());
                row
            })
            .collect();
        Grid { cells, width }
    }
}

/// A rectangular, span-free view of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    pub fn row(&self, row: usize) -> &[String] {
        self.cells.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .map(move |row| row.get(col).map(String::as_str).unwrap_or(""))
    }
}

/// Rectangular block of grid coordinates, half-open on both axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellRange {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl CellRange {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}
