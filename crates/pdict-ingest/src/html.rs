//! Table and form-of extraction from rendered wiki HTML.

use std::num::IntErrorKind;

use pdict_model::{MAX_COL_SPAN, MAX_ROW_SPAN, RawCell, RawTable};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

use crate::source::RawHtml;

/// Words a part-of-speech line starts with.
const POS_WORDS: &[&str] = &["rzeczownik", "czasownik", "przymiotnik"];

/// Part-of-speech qualifier of an entry that is an inflected form of another.
const INFLECTED_FORM: &str = "forma fleksyjna";

/// Elements that can carry a part-of-speech line.
const POS_ELEMENTS: &[&str] = &["i", "em", "dt", "h3", "h4"];

/// A table found on a page, with the part-of-speech line above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageTable {
    pub pos_heading: Option<String>,
    pub table: RawTable,
}

/// Extracts every innermost `<table>` of a page in document order.
///
/// Wrapper tables that only hold other tables are skipped.
pub fn fetch_tables(html: &RawHtml) -> Vec<PageTable> {
    let fragment = Html::parse_fragment(html.as_str());
    let mut heading: Option<String> = None;
    let mut tables = Vec::new();

    for node in fragment.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let name = element.value().name();

        if name == "table" {
            if !contains_table(element) {
                let table = extract_table(element);
                if !table.is_empty() {
                    tables.push(PageTable {
                        pos_heading: heading.clone(),
                        table,
                    });
                }
            }
        } else if POS_ELEMENTS.contains(&name) && !inside_table(element) {
            let text = collapse_whitespace(&element.text().collect::<String>());
            let lower = text.to_lowercase();
            // Inflected-form entries own no tables.
            if POS_WORDS.iter().any(|word| lower.starts_with(word))
                && !lower.contains(INFLECTED_FORM)
            {
                heading = Some(text);
            }
        }
    }

    debug!(count = tables.len(), "extracted tables");
    tables
}

fn contains_table(element: ElementRef) -> bool {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() == "table")
}

fn inside_table(element: ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() == "table")
}

fn extract_table(table: ElementRef) -> RawTable {
    let rows = direct_rows(table)
        .into_iter()
        .map(|row| {
            direct_cells(row)
                .into_iter()
                .map(|cell| {
                    let (row_span, col_span) = cell_spans(cell);
                    RawCell::with_spans(cell_text(cell), row_span, col_span)
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();
    RawTable::new(rows)
}

/// `<tr>` children of the table, looking through `thead`/`tbody`/`tfoot`.
fn direct_rows(table: ElementRef) -> Vec<ElementRef> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|e| e.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

fn direct_cells(row: ElementRef) -> Vec<ElementRef> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "td" | "th"))
        .collect()
}

/// Row and column spans, held to the limits browsers apply.
fn cell_spans(cell: ElementRef) -> (usize, usize) {
    let span = |name, max| {
        cell.value()
            .attr(name)
            .and_then(parse_span)
            .unwrap_or(1)
            .clamp(1, max)
    };
    (span("rowspan", MAX_ROW_SPAN), span("colspan", MAX_COL_SPAN))
}

fn parse_span(value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(span) => Some(span),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(usize::MAX),
        Err(_) => None,
    }
}

/// Visible text of a cell: footnotes dropped, line breaks turned into a
/// variant separator.
fn cell_text(cell: ElementRef) -> String {
    let mut raw = String::new();
    collect_text(cell, &mut raw);
    let text = collapse_whitespace(&strip_footnote_marks(&raw));
    text.trim_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => match el.name() {
                "sup" | "style" | "script" => {}
                "br" => out.push_str(" / "),
                _ => {
                    if let Some(inner) = ElementRef::wrap(child) {
                        collect_text(inner, out);
                    }
                }
            },
            _ => {}
        }
    }
}

/// Removes bracketed reference marks such as `[1]`.
fn strip_footnote_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(']') {
            Some(close) if !after[..close].is_empty()
                && after[..close].chars().all(|c| c.is_ascii_digit()) =>
            {
                rest = &after[close + 1..];
            }
            _ => {
                out.push('[');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The lemma this page is an inflected form of, if it declares one.
///
/// English Wiktionary marks such links with `form-of-definition-link`;
/// Polish Wiktionary definitions read "lm od <link>" or carry
/// "forma fleksyjna" before the link.
pub fn form_of(html: &RawHtml) -> Option<String> {
    let fragment = Html::parse_fragment(html.as_str());

    let Ok(english) = Selector::parse(".form-of-definition-link a") else {
        return None;
    };
    if let Some(target) = fragment.select(&english).find_map(link_target) {
        return Some(target);
    }

    let Ok(definitions) = Selector::parse("dd, li") else {
        return None;
    };
    fragment.select(&definitions).find_map(link_after_marker)
}

/// The first link that follows a form-of marker inside `definition`.
fn link_after_marker(definition: ElementRef) -> Option<String> {
    let mut seen = String::new();
    for node in definition.descendants() {
        match node.value() {
            Node::Text(text) => seen.push_str(text),
            Node::Element(el) if el.name() == "a" && declares_form_of(&seen) => {
                if let Some(target) = ElementRef::wrap(node).and_then(link_target) {
                    return Some(target);
                }
            }
            _ => {}
        }
    }
    None
}

fn declares_form_of(text: &str) -> bool {
    let lower = text.to_lowercase();
    if lower.contains(INFLECTED_FORM) {
        return true;
    }
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens
        .windows(2)
        .any(|pair| matches!(pair[0], "lp" | "lm") && pair[1] == "od")
}

fn link_target(link: ElementRef) -> Option<String> {
    let text = collapse_whitespace(&link.text().collect::<String>());
    if text.is_empty() || link.value().attr("href").is_some_and(|h| h.starts_with('#')) {
        None
    } else {
        Some(text)
    }
}
