//! Structure identification: header bands, axis tags and the data region.
//!
//! Header rows are the leading rows dominated by labels; header columns are
//! the leading columns dominated by labels within the remaining rows. Each
//! header row or column is a "line"; ambiguous labels are resolved per line
//! by the tag most of the line agrees on.

use std::cmp::Reverse;
use std::collections::HashMap;

use pdict_model::{
    Axis, CellRange, Comparison, DimensionTag, Grid, HeaderLabels, Label, NonFinite,
    RawTable, StructureError, TableLayout, Tense, WordClass,
};
use tracing::{debug, trace};

use crate::labels::{self, Classification};

#[derive(Debug, Clone)]
enum CellKind {
    /// Empty, dash or caption text.
    Neutral,
    Label(Classification),
    NonFinite(NonFinite),
    Form,
}

impl CellKind {
    fn of(text: &str, word_class: WordClass) -> Self {
        if text.trim().is_empty() || labels::is_dash(text) || labels::is_caption(text) {
            return CellKind::Neutral;
        }
        if word_class == WordClass::Verb
            && let Some(non_finite) = labels::classify_non_finite(text)
        {
            return CellKind::NonFinite(non_finite);
        }
        let classification = labels::classify(text);
        if !classification.is_label() {
            return CellKind::Form;
        }
        let allowed = classification.filtered(|label| word_class.allows(label.tag()));
        if allowed.is_label() {
            CellKind::Label(allowed)
        } else {
            // A label of a dimension this word class never uses, e.g. aspect.
            CellKind::Neutral
        }
    }

    fn is_header(&self) -> Option<bool> {
        match self {
            CellKind::Neutral => None,
            CellKind::Label(_) | CellKind::NonFinite(_) => Some(true),
            CellKind::Form => Some(false),
        }
    }
}

/// A line is a header when its labels outnumber its forms. Lines with
/// neither are transparent.
fn line_verdict<'a>(cells: impl Iterator<Item = &'a CellKind>) -> Option<bool> {
    let (mut headers, mut forms) = (0usize, 0usize);
    for cell in cells {
        match cell.is_header() {
            Some(true) => headers += 1,
            Some(false) => forms += 1,
            None => {}
        }
    }
    if headers == 0 && forms == 0 {
        None
    } else {
        Some(headers > forms)
    }
}

fn leading_headers(verdicts: impl Iterator<Item = Option<bool>>) -> usize {
    let mut count = 0;
    for (index, verdict) in verdicts.enumerate() {
        match verdict {
            Some(true) => count = index + 1,
            Some(false) => break,
            None => {}
        }
    }
    count
}

struct Classified {
    grid: Grid,
    kinds: Vec<Vec<CellKind>>,
    header_rows: usize,
    header_cols: usize,
}

impl Classified {
    fn new(table: &RawTable, word_class: WordClass) -> Self {
        let grid = table.expand();
        let kinds: Vec<Vec<CellKind>> = grid
            .rows()
            .map(|row| row.iter().map(|text| CellKind::of(text, word_class)).collect())
            .collect();

        // The first column is left out of row verdicts: a data row whose forms
        // are all missing would otherwise pass on its row label alone.
        let header_rows =
            leading_headers(kinds.iter().map(|row| line_verdict(row.iter().skip(1))));
        let header_cols = leading_headers(
            (0..grid.width()).map(|c| line_verdict(kinds[header_rows..].iter().map(|row| &row[c]))),
        );

        Self {
            grid,
            kinds,
            header_rows,
            header_cols,
        }
    }

    fn lines(&self, axis: Axis) -> std::ops::Range<usize> {
        match axis {
            Axis::Rows => 0..self.header_cols,
            Axis::Columns => 0..self.header_rows,
        }
    }

    fn positions(&self, axis: Axis) -> std::ops::Range<usize> {
        match axis {
            Axis::Rows => self.header_rows..self.grid.height(),
            Axis::Columns => self.header_cols..self.grid.width(),
        }
    }

    fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.grid.height(),
            Axis::Columns => self.grid.width(),
        }
    }

    fn cell(&self, axis: Axis, line: usize, position: usize) -> &CellKind {
        match axis {
            Axis::Rows => &self.kinds[position][line],
            Axis::Columns => &self.kinds[line][position],
        }
    }
}

/// Resolved headers along one axis.
struct AxisHeaders {
    headers: Vec<HeaderLabels>,
    tags: Vec<DimensionTag>,
}

impl AxisHeaders {
    fn count(&self, tag: DimensionTag) -> usize {
        self.headers
            .iter()
            .flat_map(|h| &h.labels)
            .filter(|label| label.tag() == tag)
            .count()
    }
}

fn resolve_axis(
    classified: &Classified,
    axis: Axis,
    word_class: WordClass,
    excluded: &[DimensionTag],
) -> AxisHeaders {
    let mut headers = vec![HeaderLabels::default(); classified.len(axis)];
    let mut tags = Vec::new();

    for line in classified.lines(axis) {
        let mut counts: HashMap<DimensionTag, usize> = HashMap::new();
        for position in classified.positions(axis) {
            if let CellKind::Label(classification) = classified.cell(axis, line, position) {
                for readings in &classification.parts {
                    let mut seen: Vec<DimensionTag> = readings.iter().map(Label::tag).collect();
                    seen.dedup();
                    for tag in seen.into_iter().filter(|t| !excluded.contains(t)) {
                        *counts.entry(tag).or_default() += 1;
                    }
                }
            }
        }

        for position in classified.positions(axis) {
            let header = &mut headers[position];
            match classified.cell(axis, line, position) {
                CellKind::Label(classification) => {
                    for readings in &classification.parts {
                        let Some(label) = pick_reading(readings, &counts, word_class, excluded)
                        else {
                            continue;
                        };
                        if !header.labels.contains(&label) {
                            header.labels.push(label);
                        }
                        if !tags.contains(&label.tag()) {
                            tags.push(label.tag());
                        }
                    }
                }
                CellKind::NonFinite(non_finite) => {
                    header.non_finite.get_or_insert(*non_finite);
                }
                CellKind::Neutral | CellKind::Form => {}
            }
        }
    }

    AxisHeaders { headers, tags }
}

/// Picks the reading whose tag is most common on the line, preferring the
/// outer tag on a tie. Excluded tags are used only when nothing else fits.
fn pick_reading(
    readings: &[Label],
    counts: &HashMap<DimensionTag, usize>,
    word_class: WordClass,
    excluded: &[DimensionTag],
) -> Option<Label> {
    let preferred: Vec<Label> = readings
        .iter()
        .copied()
        .filter(|label| !excluded.contains(&label.tag()))
        .collect();
    let pool = if preferred.is_empty() {
        readings
    } else {
        &preferred[..]
    };
    pool.iter().copied().max_by_key(|label| {
        (
            counts.get(&label.tag()).copied().unwrap_or(0),
            Reverse(word_class.rank(label.tag()).unwrap_or(usize::MAX)),
        )
    })
}

fn check_required(
    word_class: WordClass,
    rows: &AxisHeaders,
    cols: &AxisHeaders,
) -> Result<(), StructureError> {
    let missing: Vec<DimensionTag> = word_class
        .required_groups()
        .iter()
        .filter(|group| {
            !group
                .iter()
                .any(|tag| rows.tags.contains(tag) || cols.tags.contains(tag))
        })
        .flat_map(|group| group.iter().copied())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StructureError::InsufficientHeaders {
            word_class,
            missing,
        })
    }
}

fn check_single_valued(axis: Axis, headers: &AxisHeaders) -> Result<(), StructureError> {
    for (position, header) in headers.headers.iter().enumerate() {
        for (i, label) in header.labels.iter().enumerate() {
            if let Some(other) = header.labels[i + 1..]
                .iter()
                .find(|other| other.tag() == label.tag())
            {
                let line = match axis {
                    Axis::Rows => "row",
                    Axis::Columns => "column",
                };
                return Err(StructureError::InconsistentAxes {
                    tag: label.tag(),
                    reason: format!(
                        "{line} {position} is labelled both {} and {}",
                        label.value_str(),
                        other.value_str()
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Resolves both axes so that no tag is carried by rows and columns at once.
///
/// The axis with fewer occurrences of a shared tag is re-resolved without
/// it; on a tie the rows keep the tag.
fn resolve_axes(
    classified: &Classified,
    word_class: WordClass,
) -> Result<(AxisHeaders, AxisHeaders), StructureError> {
    let mut row_excluded: Vec<DimensionTag> = Vec::new();
    let mut col_excluded: Vec<DimensionTag> = Vec::new();
    let mut checked_required = false;

    loop {
        let rows = resolve_axis(classified, Axis::Rows, word_class, &row_excluded);
        let cols = resolve_axis(classified, Axis::Columns, word_class, &col_excluded);
        if !checked_required {
            check_required(word_class, &rows, &cols)?;
            checked_required = true;
        }

        let Some(shared) = rows.tags.iter().copied().find(|tag| cols.tags.contains(tag)) else {
            return Ok((rows, cols));
        };
        let excluded = if cols.count(shared) <= rows.count(shared) {
            &mut col_excluded
        } else {
            &mut row_excluded
        };
        if excluded.contains(&shared) {
            return Err(StructureError::InconsistentAxes {
                tag: shared,
                reason: "labels appear on both rows and columns".to_string(),
            });
        }
        trace!(tag = %shared, "re-resolving shared tag");
        excluded.push(shared);
    }
}

fn inferred_labels(word_class: WordClass, tags: &[DimensionTag]) -> Vec<Label> {
    match word_class {
        WordClass::Verb
            if !tags.contains(&DimensionTag::Tense) && !tags.contains(&DimensionTag::Mood) =>
        {
            if tags.contains(&DimensionTag::Gender) {
                vec![Label::Tense(Tense::Past)]
            } else {
                vec![Label::Tense(Tense::Present)]
            }
        }
        WordClass::Adjective if !tags.contains(&DimensionTag::Comparison) => {
            vec![Label::Comparison(Comparison::Positive)]
        }
        _ => Vec::new(),
    }
}

/// Decides which axis carries which dimension and where the data region is.
pub fn identify(table: &RawTable, word_class: WordClass) -> Result<TableLayout, StructureError> {
    let classified = Classified::new(table, word_class);
    debug!(
        word_class = %word_class,
        header_rows = classified.header_rows,
        header_cols = classified.header_cols,
        "detected header band"
    );

    let (rows, cols) = resolve_axes(&classified, word_class)?;
    check_single_valued(Axis::Rows, &rows)?;
    check_single_valued(Axis::Columns, &cols)?;

    let mut all_tags: Vec<DimensionTag> = rows.tags.iter().chain(&cols.tags).copied().collect();
    all_tags.sort();
    let inferred = inferred_labels(word_class, &all_tags);
    if !inferred.is_empty() {
        debug!(?inferred, "inferred implicit dimensions");
    }

    let layout = TableLayout {
        word_class,
        header_rows: classified.header_rows,
        header_cols: classified.header_cols,
        row_tags: rows.tags,
        col_tags: cols.tags,
        data: CellRange {
            rows: classified.positions(Axis::Rows),
            cols: classified.positions(Axis::Columns),
        },
        row_headers: rows.headers,
        col_headers: cols.headers,
        inferred,
    };
    debug!(row_tags = ?layout.row_tags, col_tags = ?layout.col_tags, "identified table layout");
    Ok(layout)
}
