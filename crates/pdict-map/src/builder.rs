//! Paradigm building: places every data cell at its dimension tuple.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use pdict_model::{
    Animacy, BuildError, BuildOptions, Case, Comparison, DimensionTag, FormValue, Gender,
    GenderClass, Grid, Label, Mood, MorphologicalForms, NonFinite, Number, Paradigm, Person,
    RawTable, Series, SeriesForms, TableLayout, Tense, WordClass,
};
use rapidfuzz::distance::prefix;
use tracing::{debug, warn};

use crate::variants::{ParsedCell, parse_cell};

/// A complete dimension tuple for one word class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Noun(Number, Case),
    Verb(Series, Option<Gender>, Number, Person),
    Adjective(Comparison, Number, GenderClass, Case),
}

#[derive(Default)]
struct Tuple {
    case: Option<Case>,
    number: Option<Number>,
    gender: Option<Gender>,
    animacy: Option<Animacy>,
    person: Option<Person>,
    tense: Option<Tense>,
    mood: Option<Mood>,
    comparison: Option<Comparison>,
}

impl Tuple {
    /// The first value of each tag wins.
    fn from_labels(labels: &[Label]) -> Self {
        let mut tuple = Tuple::default();
        for label in labels {
            match *label {
                Label::Case(v) => {
                    tuple.case.get_or_insert(v);
                }
                Label::Number(v) => {
                    tuple.number.get_or_insert(v);
                }
                Label::Gender(v) => {
                    tuple.gender.get_or_insert(v);
                }
                Label::Animacy(v) => {
                    tuple.animacy.get_or_insert(v);
                }
                Label::Person(v) => {
                    tuple.person.get_or_insert(v);
                }
                Label::Tense(v) => {
                    tuple.tense.get_or_insert(v);
                }
                Label::Mood(v) => {
                    tuple.mood.get_or_insert(v);
                }
                Label::Comparison(v) => {
                    tuple.comparison.get_or_insert(v);
                }
                Label::Aspect(_) => {}
            }
        }
        tuple
    }
}

fn require<T>(value: Option<T>, tag: DimensionTag, missing: &mut Vec<DimensionTag>) -> Option<T> {
    if value.is_none() {
        missing.push(tag);
    }
    value
}

impl Slot {
    /// Reads the tuple a word class needs from a cell's labels; extra tags are
    /// ignored.
    fn locate(word_class: WordClass, labels: &[Label]) -> Result<Slot, Vec<DimensionTag>> {
        let tuple = Tuple::from_labels(labels);
        let mut missing = Vec::new();
        let slot = match word_class {
            WordClass::Noun => {
                let number = require(tuple.number, DimensionTag::Number, &mut missing);
                let case = require(tuple.case, DimensionTag::Case, &mut missing);
                number.zip(case).map(|(n, c)| Slot::Noun(n, c))
            }
            WordClass::Verb => {
                let series = require(
                    Series::from_parts(tuple.tense, tuple.mood),
                    DimensionTag::Tense,
                    &mut missing,
                );
                let gender = match series {
                    Some(series) if series.is_gendered() => {
                        require(tuple.gender, DimensionTag::Gender, &mut missing).map(Some)
                    }
                    _ => Some(None),
                };
                let number = require(tuple.number, DimensionTag::Number, &mut missing);
                let person = require(tuple.person, DimensionTag::Person, &mut missing);
                match (series, gender, number, person) {
                    (Some(s), Some(g), Some(n), Some(p)) => Some(Slot::Verb(s, g, n, p)),
                    _ => None,
                }
            }
            WordClass::Adjective => {
                let comparison =
                    require(tuple.comparison, DimensionTag::Comparison, &mut missing);
                let number = require(tuple.number, DimensionTag::Number, &mut missing);
                let class = require(
                    GenderClass::from_parts(tuple.gender, tuple.animacy),
                    DimensionTag::Gender,
                    &mut missing,
                );
                let case = require(tuple.case, DimensionTag::Case, &mut missing);
                match (comparison, number, class, case) {
                    (Some(d), Some(n), Some(g), Some(c)) => Some(Slot::Adjective(d, n, g, c)),
                    _ => None,
                }
            }
        };
        slot.ok_or(missing)
    }

    fn path(&self) -> String {
        match self {
            Slot::Noun(n, c) => format!("{}.{}", n.as_str(), c.as_str()),
            Slot::Verb(s, Some(g), n, p) => {
                format!("{}.{}.{}.{}", s.as_str(), g.as_str(), n.as_str(), p.as_str())
            }
            Slot::Verb(s, None, n, p) => format!("{}.{}.{}", s.as_str(), n.as_str(), p.as_str()),
            Slot::Adjective(d, n, g, c) => {
                format!("{}.{}.{}.{}", d.as_str(), n.as_str(), g.as_str(), c.as_str())
            }
        }
    }
}

fn fill<K: Ord>(entry: Entry<'_, K, FormValue>, value: FormValue) -> bool {
    match entry {
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            true
        }
        Entry::Occupied(_) => false,
    }
}

/// Stores `value` at `slot` unless the position is already filled.
fn insert(paradigm: &mut Paradigm, slot: Slot, value: FormValue) -> bool {
    match (paradigm, slot) {
        (Paradigm::Noun(forms), Slot::Noun(n, c)) => {
            fill(forms.entry(n).or_default().entry(c), value)
        }
        (Paradigm::Verb(forms), Slot::Verb(s, g, n, p)) => {
            let series = forms
                .series
                .entry(s)
                .or_insert_with(|| SeriesForms::for_series(s));
            match (series, g) {
                (SeriesForms::Gendered(by_gender), Some(g)) => fill(
                    by_gender.entry(g).or_default().entry(n).or_default().entry(p),
                    value,
                ),
                (SeriesForms::Plain(by_number), _) => {
                    fill(by_number.entry(n).or_default().entry(p), value)
                }
                (SeriesForms::Gendered(_), None) => false,
            }
        }
        (Paradigm::Adjective(forms), Slot::Adjective(d, n, g, c)) => fill(
            forms
                .entry(d)
                .or_default()
                .entry(n)
                .or_default()
                .entry(g)
                .or_default()
                .entry(c),
            value,
        ),
        _ => false,
    }
}

/// Assembles a paradigm from a table and its identified layout.
pub fn build(
    table: &RawTable,
    layout: &TableLayout,
    word_class: WordClass,
    lemma: &str,
) -> MorphologicalForms {
    build_with(table, layout, word_class, lemma, &BuildOptions::default())
}

/// Like [`build`], with explicit options.
///
/// Cells whose tuple is incomplete are recorded in `metadata.skipped` and the
/// rest of the table is still placed.
pub fn build_with(
    table: &RawTable,
    layout: &TableLayout,
    word_class: WordClass,
    lemma: &str,
    options: &BuildOptions,
) -> MorphologicalForms {
    let grid = table.expand();
    let mut forms = MorphologicalForms::new(lemma, Paradigm::empty(word_class));
    for label in &layout.inferred {
        forms
            .metadata
            .notes
            .push(format!("{} inferred as {}", label.tag(), label.value_str()));
    }

    for row in layout.data.rows.clone() {
        if let Some(non_finite) = layout.row_headers.get(row).and_then(|h| h.non_finite) {
            place_non_finite(&grid, layout, row, non_finite, &mut forms);
            continue;
        }

        for col in layout.data.cols.clone() {
            let text = grid.get(row, col).unwrap_or_default();
            let labels = layout.labels_at(row, col);
            match Slot::locate(word_class, &labels) {
                Ok(slot) => {
                    let ParsedCell {
                        value,
                        alternatives,
                    } = parse_cell(text);
                    if insert(&mut forms.forms, slot, value) && !alternatives.is_empty() {
                        forms.metadata.alternatives.insert(slot.path(), alternatives);
                    }
                }
                // Blank padding outside the paradigm.
                Err(_) if parse_cell(text).value.is_inapplicable() => {}
                Err(missing) => {
                    let error = BuildError::IncompleteTuple { row, col, missing };
                    warn!(lemma, %error, "skipping cell");
                    forms.metadata.skipped.push(error);
                }
            }
        }
    }

    complete_gendered_series(&mut forms);
    flag_suppletion(&mut forms, options);
    forms
}

fn place_non_finite(
    grid: &Grid,
    layout: &TableLayout,
    row: usize,
    non_finite: NonFinite,
    forms: &mut MorphologicalForms,
) {
    let Paradigm::Verb(verb) = &mut forms.forms else {
        return;
    };
    let Some(text) = layout
        .data
        .cols
        .clone()
        .filter_map(|col| grid.get(row, col))
        .find(|text| !text.trim().is_empty())
    else {
        return;
    };
    if verb.non_finite.contains_key(&non_finite) {
        return;
    }
    let ParsedCell {
        value,
        alternatives,
    } = parse_cell(text);
    verb.non_finite.insert(non_finite, value);
    if !alternatives.is_empty() {
        forms
            .metadata
            .alternatives
            .insert(non_finite.as_str().to_string(), alternatives);
    }
}

/// A person listed for one gender of a past or conditional series but not
/// for another does not exist for the other; store it as inapplicable.
fn complete_gendered_series(forms: &mut MorphologicalForms) {
    let Paradigm::Verb(verb) = &mut forms.forms else {
        return;
    };
    for series in verb.series.values_mut() {
        let SeriesForms::Gendered(by_gender) = series else {
            continue;
        };
        let mut persons: BTreeMap<Number, BTreeSet<Person>> = BTreeMap::new();
        for by_number in by_gender.values() {
            for (number, by_person) in by_number {
                persons
                    .entry(*number)
                    .or_default()
                    .extend(by_person.keys().copied());
            }
        }
        for by_number in by_gender.values_mut() {
            for (number, expected) in &persons {
                let by_person = by_number.entry(*number).or_default();
                for person in expected {
                    by_person.entry(*person).or_insert(FormValue::Inapplicable);
                }
            }
        }
    }
}

/// Share of the shorter form covered by the common prefix.
pub fn stem_share(a: &str, b: &str) -> Option<f64> {
    let shorter = a.chars().count().min(b.chars().count());
    if shorter == 0 {
        return None;
    }
    let common = prefix::similarity(a.chars(), b.chars());
    Some(common as f64 / shorter as f64)
}

/// Singular/plural form pairs at otherwise identical coordinates.
fn number_pairs(forms: &MorphologicalForms) -> Vec<(String, String)> {
    let leaves = forms.leaves();
    let by_path: HashMap<&str, &FormValue> =
        leaves.iter().map(|(path, value)| (path.as_str(), *value)).collect();

    let mut pairs = Vec::new();
    for (path, value) in &leaves {
        let segments: Vec<&str> = path.split('.').collect();
        let Some(index) = segments.iter().position(|s| *s == Number::Singular.as_str()) else {
            continue;
        };
        let mut counterpart = segments.clone();
        counterpart[index] = Number::Plural.as_str();
        let counterpart = counterpart.join(".");
        let singular = value.primary();
        let plural = by_path.get(counterpart.as_str()).and_then(|v| v.primary());
        if let (Some(singular), Some(plural)) = (singular, plural) {
            pairs.push((singular.to_lowercase(), plural.to_lowercase()));
        }
    }
    pairs
}

/// Flags paradigms whose singular and plural forms share almost no stem.
fn flag_suppletion(forms: &mut MorphologicalForms, options: &BuildOptions) {
    let shares: Vec<f64> = number_pairs(forms)
        .iter()
        .filter_map(|(singular, plural)| stem_share(singular, plural))
        .collect();
    if shares.is_empty() {
        return;
    }
    let mean = shares.iter().sum::<f64>() / shares.len() as f64;
    if mean < options.suppletion_threshold {
        debug!(lemma = %forms.lemma, mean, "singular and plural stems diverge");
        forms.metadata.suppletive = true;
        forms.metadata.irregular = true;
    }
}
