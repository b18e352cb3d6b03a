//! Result of structure identification: which axis carries which dimension.

use serde::Serialize;

use crate::enums::{DimensionTag, Label, NonFinite, WordClass};
use crate::table::CellRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Rows,
    Columns,
}

/// Labels active for one grid row or column after disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderLabels {
    pub labels: Vec<Label>,
    /// Set when the header names a non-finite verb form instead of a
    /// dimension value; the whole line then holds a single form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_finite: Option<NonFinite>,
}

impl HeaderLabels {
    pub fn value(&self, tag: DimensionTag) -> Option<Label> {
        self.labels.iter().copied().find(|label| label.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    pub word_class: WordClass,
    /// Number of leading grid rows that are column headers.
    pub header_rows: usize,
    /// Number of leading grid columns that are row headers.
    pub header_cols: usize,
    /// Tags carried by the row headers, in physical order (outermost first).
    pub row_tags: Vec<DimensionTag>,
    /// Tags carried by the column headers, in physical order.
    pub col_tags: Vec<DimensionTag>,
    pub data: CellRange,
    /// Indexed by grid row; empty for header rows.
    pub row_headers: Vec<HeaderLabels>,
    /// Indexed by grid column; empty for header columns.
    pub col_headers: Vec<HeaderLabels>,
    /// Values assumed for dimensions the table leaves implicit.
    pub inferred: Vec<Label>,
}

impl TableLayout {
    pub fn axis_of(&self, tag: DimensionTag) -> Option<Axis> {
        if self.row_tags.contains(&tag) {
            Some(Axis::Rows)
        } else if self.col_tags.contains(&tag) {
            Some(Axis::Columns)
        } else {
            None
        }
    }

    /// Every tag the layout can supply, headers and inferred values alike.
    pub fn tags(&self) -> Vec<DimensionTag> {
        let mut tags: Vec<DimensionTag> = self
            .row_tags
            .iter()
            .chain(&self.col_tags)
            .copied()
            .chain(self.inferred.iter().map(Label::tag))
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Full label tuple for one data cell.
    pub fn labels_at(&self, row: usize, col: usize) -> Vec<Label> {
        let mut labels = Vec::new();
        if let Some(header) = self.row_headers.get(row) {
            labels.extend(header.labels.iter().copied());
        }
        if let Some(header) = self.col_headers.get(col) {
            labels.extend(header.labels.iter().copied());
        }
        for inferred in &self.inferred {
            if !labels.iter().any(|l| l.tag() == inferred.tag()) {
                labels.push(*inferred);
            }
        }
        labels
    }
}
