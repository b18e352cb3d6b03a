//! Label classification for table header cells.
//!
//! Header text is matched against a fixed table of Polish grammatical terms
//! and their abbreviations. Matching is case-insensitive and keeps
//! diacritics. A cell that is an inflected form rather than a label yields an
//! empty classification.

use std::collections::HashMap;
use std::sync::LazyLock;

use pdict_model::{
    Animacy, Aspect, Case, Comparison, Gender, Label, Mood, NonFinite, Number, Person, Tense,
};

/// Longest label phrase, in whitespace-separated tokens.
const MAX_PHRASE_TOKENS: usize = 4;

/// Result of classifying one cell.
///
/// A compound label ("1. os. m.") has one part per segment; each part lists
/// every reading the segment admits ("M" is nominative or masculine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub parts: Vec<Vec<Label>>,
}

impl Classification {
    pub fn is_label(&self) -> bool {
        !self.parts.is_empty()
    }

    /// All readings of all parts.
    pub fn candidates(&self) -> impl Iterator<Item = Label> + '_ {
        self.parts.iter().flatten().copied()
    }

    /// Keeps only readings accepted by `keep`, dropping parts left empty.
    pub fn filtered(&self, keep: impl Fn(&Label) -> bool) -> Classification {
        let parts = self
            .parts
            .iter()
            .map(|readings| readings.iter().copied().filter(|l| keep(l)).collect::<Vec<_>>())
            .filter(|readings| !readings.is_empty())
            .collect();
        Classification { parts }
    }
}

static LABELS: LazyLock<HashMap<&'static str, Vec<Label>>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Vec<Label>> = HashMap::new();
    let mut add = |keys: &[&'static str], label: Label| {
        for key in keys {
            let readings = map.entry(*key).or_default();
            if !readings.contains(&label) {
                readings.push(label);
            }
        }
    };

    // Cases: full names, dictionary abbreviations and the one-letter table codes
    add(&["mianownik", "mian.", "m", "mian"], Label::Case(Case::Nominative));
    add(&["dopełniacz", "dop.", "d", "dop"], Label::Case(Case::Genitive));
    add(&["celownik", "cel.", "c", "cel"], Label::Case(Case::Dative));
    add(&["biernik", "biern.", "b", "bier.", "biern"], Label::Case(Case::Accusative));
    add(&["narzędnik", "narz.", "n", "narz"], Label::Case(Case::Instrumental));
    add(
        &["miejscownik", "miejsc.", "miej.", "ms", "msc.", "miejsc"],
        Label::Case(Case::Locative),
    );
    add(&["wołacz", "woł.", "w", "woł"], Label::Case(Case::Vocative));

    // Number
    add(
        &["liczba pojedyncza", "lp", "lp.", "l.poj.", "l. poj.", "pojedyncza"],
        Label::Number(Number::Singular),
    );
    add(
        &["liczba mnoga", "lm", "lm.", "l.mn.", "l. mn.", "mnoga"],
        Label::Number(Number::Plural),
    );

    // Person
    add(
        &["1. os.", "1 os.", "1.os.", "1. osoba", "pierwsza osoba", "ja"],
        Label::Person(Person::First),
    );
    add(
        &["2. os.", "2 os.", "2.os.", "2. osoba", "druga osoba", "ty"],
        Label::Person(Person::Second),
    );
    add(
        &["3. os.", "3 os.", "3.os.", "3. osoba", "trzecia osoba", "on/ona/ono"],
        Label::Person(Person::Third),
    );
    add(&["bezosobowo", "forma bezosobowa"], Label::Person(Person::Impersonal));

    // Gender; the bare letters double as case codes above
    add(
        &["rodzaj męski", "męski", "m.", "m", "r. m.", "mę."],
        Label::Gender(Gender::Masculine),
    );
    add(
        &["rodzaj żeński", "żeński", "ż.", "ż", "r. ż."],
        Label::Gender(Gender::Feminine),
    );
    add(
        &["rodzaj nijaki", "nijaki", "n.", "n", "r. n."],
        Label::Gender(Gender::Neuter),
    );

    // Animacy
    add(
        &["męskoosobowy", "mos", "mos.", "m. os.", "m.-os.", "osobowy"],
        Label::Animacy(Animacy::Personal),
    );
    add(
        &["męskozwierzęcy", "mzw", "mzw.", "m. zw.", "żywotny", "męskożywotny"],
        Label::Animacy(Animacy::Animate),
    );
    add(
        &[
            "męskorzeczowy",
            "mrz",
            "mrz.",
            "m. rz.",
            "mnzw",
            "mnzw.",
            "nieżywotny",
            "męskonieżywotny",
        ],
        Label::Animacy(Animacy::Inanimate),
    );
    add(
        &["niemęskoosobowy", "nmos", "nmos.", "nm", "nm.", "nie-mos"],
        Label::Animacy(Animacy::NonPersonal),
    );

    // Tense and mood
    add(
        &["czas teraźniejszy", "teraźniejszy", "cz. teraźn."],
        Label::Tense(Tense::Present),
    );
    add(&["czas przeszły", "przeszły", "cz. przesz."], Label::Tense(Tense::Past));
    add(
        &["czas przyszły", "przyszły", "czas przyszły prosty", "czas przyszły złożony"],
        Label::Tense(Tense::Future),
    );
    add(&["tryb oznajmujący", "oznajmujący"], Label::Mood(Mood::Indicative));
    add(&["tryb rozkazujący", "rozkazujący"], Label::Mood(Mood::Imperative));
    add(
        &["tryb przypuszczający", "przypuszczający", "tryb warunkowy"],
        Label::Mood(Mood::Conditional),
    );

    // Aspect
    add(&["niedokonany", "ndk.", "ndk", "aspekt niedokonany"], Label::Aspect(Aspect::Imperfective));
    add(&["dokonany", "dk.", "dk", "aspekt dokonany"], Label::Aspect(Aspect::Perfective));
    add(&["dwuaspektowy"], Label::Aspect(Aspect::Biaspectual));

    // Degree
    add(
        &["stopień równy", "równy", "st. równy"],
        Label::Comparison(Comparison::Positive),
    );
    add(
        &["stopień wyższy", "wyższy", "st. wyższy"],
        Label::Comparison(Comparison::Comparative),
    );
    add(
        &["stopień najwyższy", "najwyższy", "st. najwyższy"],
        Label::Comparison(Comparison::Superlative),
    );

    map
});

static NON_FINITE: LazyLock<HashMap<&'static str, NonFinite>> = LazyLock::new(|| {
    HashMap::from([
        ("bezokolicznik", NonFinite::Infinitive),
        ("imiesłów przymiotnikowy", NonFinite::AdjectivalParticiple),
        ("imiesłów przymiotnikowy czynny", NonFinite::ActiveAdjectivalParticiple),
        ("imiesłów przymiotnikowy bierny", NonFinite::PassiveAdjectivalParticiple),
        ("imiesłów przysłówkowy współczesny", NonFinite::ContemporaryAdverbialParticiple),
        ("imiesłów przysłówkowy uprzedni", NonFinite::AnteriorAdverbialParticiple),
        ("rzeczownik odsłowny", NonFinite::VerbalNoun),
        ("forma bezosobowa czasu przeszłego", NonFinite::ImpersonalPast),
        ("bezosobnik", NonFinite::ImpersonalPast),
    ])
});

const CAPTIONS: &[&str] = &[
    "forma",
    "formy",
    "przypadek",
    "osoba",
    "liczba",
    "rodzaj",
    "czas",
    "tryb",
    "odmiana",
    "stopień",
];

/// Lowercases, folds non-breaking spaces, collapses whitespace and drops a
/// trailing colon.
pub fn normalize(text: &str) -> String {
    let lowered = text.replace('\u{a0}', " ").to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(':').trim_end().to_string()
}

/// Classifies a header cell into every dimension value it could denote.
pub fn classify(text: &str) -> Classification {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Classification::default();
    }
    if let Some(readings) = LABELS.get(normalized.as_str()) {
        return Classification {
            parts: vec![readings.clone()],
        };
    }
    segment(&normalized).unwrap_or_default()
}

/// Greedy longest-phrase segmentation; fails unless every token is covered.
fn segment(normalized: &str) -> Option<Classification> {
    let tokens: Vec<&str> = normalized.split(' ').collect();
    let mut parts = Vec::new();
    let mut i = 0;
    'outer: while i < tokens.len() {
        let longest = MAX_PHRASE_TOKENS.min(tokens.len() - i);
        for len in (1..=longest).rev() {
            let phrase = tokens[i..i + len].join(" ");
            if let Some(readings) = LABELS.get(phrase.as_str()) {
                parts.push(readings.clone());
                i += len;
                continue 'outer;
            }
        }
        return None;
    }
    Some(Classification { parts })
}

/// Names a non-finite verb form row ("bezokolicznik", "imiesłów ...").
pub fn classify_non_finite(text: &str) -> Option<NonFinite> {
    NON_FINITE.get(normalize(text).as_str()).copied()
}

/// Table captions carry no dimension and are neutral in header detection.
pub fn is_caption(text: &str) -> bool {
    CAPTIONS.contains(&normalize(text).as_str())
}

/// Dash placeholders mark an attested gap.
pub fn is_dash(text: &str) -> bool {
    matches!(text.trim(), "—" | "–" | "-" | "―")
}
