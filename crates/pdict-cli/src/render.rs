//! Terminal rendering of lookup results.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use pdict_core::{LemmaResolution, LookupReport, TableOutcome};
use pdict_model::{FormValue, MorphologicalForms, RawTable};

const NUMBER_COLUMNS: [&str; 2] = ["singular", "plural"];

/// Whether tables carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    /// Style only when stdout is a terminal.
    Auto,
    Always,
    Never,
}

fn new_table(styling: Styling) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Text for one leaf, with any unclassified alternatives appended.
fn form_text(value: &FormValue, alternatives: Option<&Vec<String>>) -> String {
    let mut text = match value {
        FormValue::Form(form) => form.clone(),
        FormValue::Inapplicable => return "—".to_string(),
        FormValue::Variants(variants) => variants
            .iter()
            .map(|(class, form)| match class.as_str() {
                "primary" => form.clone(),
                other => format!("{form} ({other})"),
            })
            .collect::<Vec<_>>()
            .join(" / "),
    };
    for alternative in alternatives.into_iter().flatten() {
        text.push_str(" / ");
        text.push_str(alternative);
    }
    text
}

fn form_cell(forms: &MorphologicalForms, path: &str, value: &FormValue) -> Cell {
    let text = form_text(value, forms.metadata.alternatives.get(path));
    if value.is_inapplicable() {
        dim_cell(text)
    } else {
        Cell::new(text)
    }
}

/// Lays a paradigm out with numbers as columns and the remaining
/// dimensions as row labels. Non-finite forms get a row of their own.
pub fn paradigm_table(forms: &MorphologicalForms, styling: Styling) -> Table {
    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("form"),
        header_cell(NUMBER_COLUMNS[0]),
        header_cell(NUMBER_COLUMNS[1]),
    ]);

    let mut rows: Vec<(String, [Option<Cell>; 2])> = Vec::new();
    for (path, value) in forms.leaves() {
        let segments: Vec<&str> = path.split('.').collect();
        let number = segments
            .iter()
            .position(|segment| NUMBER_COLUMNS.contains(segment));
        let (label, column) = match number {
            Some(at) => {
                let label = segments
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != at)
                    .map(|(_, s)| *s)
                    .collect::<Vec<_>>()
                    .join(" ");
                let column = usize::from(segments[at] == NUMBER_COLUMNS[1]);
                (label, column)
            }
            None => (path.replace('_', " "), 0),
        };

        let cell = form_cell(forms, &path, value);
        match rows.iter_mut().find(|(l, _)| *l == label) {
            Some((_, cells)) => cells[column] = Some(cell),
            None => {
                let mut cells = [None, None];
                cells[column] = Some(cell);
                rows.push((label, cells));
            }
        }
    }

    for (label, [singular, plural]) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            singular.unwrap_or_else(|| Cell::new("")),
            plural.unwrap_or_else(|| Cell::new("")),
        ]);
    }
    table
}

/// The table as it appeared on the page, spans expanded.
pub fn raw_table(table: &RawTable, styling: Styling) -> Table {
    let mut out = new_table(styling);
    for row in table.expand().rows() {
        out.add_row(row.to_vec());
    }
    out
}

fn describe(forms: &MorphologicalForms) -> String {
    let mut parts = vec![forms.word_class().to_string()];
    if let Some(aspect) = forms.aspect {
        parts.push(aspect.as_str().to_string());
    }
    if let Some(gender) = forms.gender {
        parts.push(gender.as_str().to_string());
    }
    if let Some(animacy) = forms.animacy {
        parts.push(animacy.as_str().to_string());
    }
    if forms.metadata.suppletive {
        parts.push("suppletive".to_string());
    }
    parts.join(", ")
}

pub fn write_paradigm(
    out: &mut impl Write,
    forms: &MorphologicalForms,
    styling: Styling,
) -> io::Result<()> {
    writeln!(out, "{} ({})", forms.lemma, describe(forms))?;
    writeln!(out, "{}", paradigm_table(forms, styling))?;
    for note in &forms.metadata.notes {
        writeln!(out, "note: {note}")?;
    }
    for skipped in &forms.metadata.skipped {
        writeln!(out, "skipped: {skipped}")?;
    }
    Ok(())
}

pub fn write_resolution(
    out: &mut impl Write,
    query: &str,
    resolution: &LemmaResolution,
) -> io::Result<()> {
    match resolution {
        LemmaResolution::Found(lemma) => writeln!(out, "{lemma}"),
        LemmaResolution::Redirected(lemma) => writeln!(out, "{lemma} (from {query})"),
        LemmaResolution::NotFound => writeln!(out, "no results for {query}"),
    }
}

pub fn write_table_outcome(
    out: &mut impl Write,
    outcome: &TableOutcome,
    styling: Styling,
) -> io::Result<()> {
    match outcome {
        TableOutcome::Interpreted(forms) => write_paradigm(out, forms, styling),
        TableOutcome::Fallback {
            heading,
            error,
            table,
        } => {
            if let Some(heading) = heading {
                writeln!(out, "{heading}")?;
            }
            writeln!(out, "could not interpret table: {error}")?;
            writeln!(out, "{}", raw_table(table, styling))
        }
        TableOutcome::Skipped { .. } => Ok(()),
    }
}

pub fn write_report(
    out: &mut impl Write,
    report: &LookupReport,
    styling: Styling,
) -> io::Result<()> {
    write_resolution(out, &report.query, &report.resolution)?;
    let shown: Vec<&TableOutcome> = report
        .tables
        .iter()
        .filter(|outcome| !matches!(outcome, TableOutcome::Skipped { .. }))
        .collect();
    if shown.is_empty() {
        writeln!(out, "no inflection tables")?;
    }
    for outcome in shown {
        writeln!(out)?;
        write_table_outcome(out, outcome, styling)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdict_model::FormClass;
    use std::collections::BTreeMap;

    #[test]
    fn form_text_variants_and_alternatives() {
        assert_eq!(form_text(&FormValue::Inapplicable, None), "—");
        assert_eq!(
            form_text(&FormValue::form("byłbym"), Some(&vec!["bym".to_string()])),
            "byłbym / bym"
        );

        let variants = BTreeMap::from([
            (FormClass::Primary, "człowieku".to_string()),
            (FormClass::Archaic, "człowiecze".to_string()),
        ]);
        assert_eq!(
            form_text(&FormValue::Variants(variants), None),
            "człowieku / człowiecze (archaic)"
        );
    }

    #[test]
    fn resolution_lines() {
        let mut out = Vec::new();
        write_resolution(&mut out, "psy", &LemmaResolution::Redirected("pies".into())).unwrap();
        write_resolution(&mut out, "xyz", &LemmaResolution::NotFound).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "pies (from psy)\nno results for xyz\n"
        );
    }
}
