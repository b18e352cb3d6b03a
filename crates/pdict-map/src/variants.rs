//! Cells listing several surface forms.
//!
//! Alternates are separated by `/`, `,` or ` lub ` outside parentheses. A
//! parenthesised note such as `(arch.)` or `(gw. śląska)` classifies the form
//! it follows.

use std::collections::BTreeMap;

use pdict_model::{FormClass, FormValue};

use crate::labels::is_dash;

const ARCHAIC: &[&str] = &[
    "arch.",
    "arch",
    "archaiczny",
    "archaicznie",
    "przest.",
    "przestarzały",
    "daw.",
    "dawny",
    "dawniej",
];
const REGIONAL: &[&str] = &["reg.", "regionalny", "regionalnie", "region."];
const DIALECT: &[&str] = &["gw.", "gwarowy", "gwar."];

/// A cell reduced to a leaf value plus any unclassified extra forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCell {
    pub value: FormValue,
    pub alternatives: Vec<String>,
}

impl ParsedCell {
    fn single(value: FormValue) -> Self {
        Self {
            value,
            alternatives: Vec::new(),
        }
    }
}

/// Turns cell text into a leaf. Empty and dash cells are inapplicable.
pub fn parse_cell(text: &str) -> ParsedCell {
    let text = text.trim();
    if text.is_empty() || is_dash(text) {
        return ParsedCell::single(FormValue::Inapplicable);
    }

    let pieces: Vec<(String, Option<FormClass>)> = split_alternates(text)
        .into_iter()
        .map(strip_marker)
        .filter(|(form, _)| !form.is_empty() && !is_dash(form))
        .collect();

    match pieces.as_slice() {
        [] => ParsedCell::single(FormValue::Inapplicable),
        [(form, _)] => ParsedCell::single(FormValue::Form(form.clone())),
        [first, rest @ ..] => {
            if rest.iter().all(|(_, class)| class.is_some()) {
                let mut variants = BTreeMap::new();
                let first_class = first.1.clone().unwrap_or(FormClass::Primary);
                variants.insert(first_class, first.0.clone());
                for (form, class) in rest.iter().cloned() {
                    if let Some(class) = class
                        && variants.insert(class, form).is_some()
                    {
                        return first_wins(&pieces);
                    }
                }
                if variants.len() == pieces.len() {
                    return ParsedCell::single(FormValue::Variants(variants));
                }
            }
            first_wins(&pieces)
        }
    }
}

fn first_wins(pieces: &[(String, Option<FormClass>)]) -> ParsedCell {
    let mut forms = pieces.iter().map(|(form, _)| form.clone());
    let primary = forms.next().unwrap_or_default();
    ParsedCell {
        value: FormValue::Form(primary),
        alternatives: forms.collect(),
    }
}

/// Splits at separators that sit outside parentheses.
pub fn split_alternates(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut skip_until = 0;

    for (i, ch) in text.char_indices() {
        if i < skip_until {
            continue;
        }
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '/' | ',' if depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + ch.len_utf8();
            }
            ' ' if depth == 0 && text[i..].starts_with(" lub ") => {
                pieces.push(&text[start..i]);
                start = i + " lub ".len();
                skip_until = start;
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Removes parenthesised notes, returning the bare form and the first note
/// that names a register.
fn strip_marker(piece: &str) -> (String, Option<FormClass>) {
    let mut form = String::new();
    let mut note = String::new();
    let mut class = None;
    let mut depth = 0usize;

    for ch in piece.chars() {
        match ch {
            '(' => {
                if depth > 0 {
                    note.push(ch);
                }
                depth += 1;
            }
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if class.is_none() {
                        class = marker_class(&note);
                    }
                    note.clear();
                } else {
                    note.push(ch);
                }
            }
            _ if depth > 0 => note.push(ch),
            _ => form.push(ch),
        }
    }

    let form = form.split_whitespace().collect::<Vec<_>>().join(" ");
    (form, class)
}

/// Classifies a usage note: `arch.`, `reg.`, `gw. kaszubska`, ...
pub fn marker_class(note: &str) -> Option<FormClass> {
    let note = note.trim().to_lowercase();
    let mut tokens = note.split_whitespace();
    let head = tokens.next()?.trim_end_matches(',');

    if ARCHAIC.contains(&head) {
        Some(FormClass::Archaic)
    } else if REGIONAL.contains(&head) {
        Some(FormClass::Regional)
    } else if DIALECT.contains(&head) {
        let name = tokens.collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            Some(FormClass::Regional)
        } else {
            Some(FormClass::Dialect(name))
        }
    } else {
        None
    }
}
