//! Part-of-speech headings ("czasownik dokonany", "rzeczownik, rodzaj męskoosobowy").

use pdict_model::{Animacy, Aspect, Gender, WordClass};
use serde::Serialize;

/// Cross-references end the part of the heading that describes this entry.
const CROSS_REFERENCES: &[&str] = &["zobacz też", "zobacz", "por.", "zob.", "cf."];

/// Grammatical properties stated by a part-of-speech heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GrammarProperties {
    pub word_class: Option<WordClass>,
    pub aspect: Option<Aspect>,
    pub gender: Option<Gender>,
    pub animacy: Option<Animacy>,
}

impl GrammarProperties {
    /// Reads a heading. Markers are matched as whole words, so "dk" never
    /// matches inside "ndk"; the first marker of each kind wins.
    pub fn from_heading(text: &str) -> Self {
        let core = heading_core(&text.to_lowercase());
        let mut props = GrammarProperties::default();

        for token in core
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if props.word_class.is_none() {
                props.word_class = match token {
                    "rzeczownik" => Some(WordClass::Noun),
                    "czasownik" => Some(WordClass::Verb),
                    "przymiotnik" => Some(WordClass::Adjective),
                    _ => None,
                };
            }
            if props.aspect.is_none() {
                props.aspect = match token {
                    "niedokonany" | "ndk" => Some(Aspect::Imperfective),
                    "dokonany" | "dk" => Some(Aspect::Perfective),
                    "dwuaspektowy" => Some(Aspect::Biaspectual),
                    _ => None,
                };
            }
            let (gender, animacy) = gender_marker(token);
            if props.gender.is_none() {
                props.gender = gender;
            }
            if props.animacy.is_none() {
                props.animacy = animacy;
            }
        }

        if props.animacy.is_some() && props.gender.is_none() {
            props.gender = Some(Gender::Masculine);
        }
        props
    }
}

fn gender_marker(token: &str) -> (Option<Gender>, Option<Animacy>) {
    match token {
        "męski" | "męskiego" | "m" => (Some(Gender::Masculine), None),
        "żeński" | "żeńskiego" | "ż" => (Some(Gender::Feminine), None),
        "nijaki" | "nijakiego" | "n" => (Some(Gender::Neuter), None),
        "osobowy" | "mos" => (None, Some(Animacy::Personal)),
        "żywotny" | "mzw" => (None, Some(Animacy::Animate)),
        "nieżywotny" | "mnzw" | "mrz" => (None, Some(Animacy::Inanimate)),
        "męskoosobowy" => (Some(Gender::Masculine), Some(Animacy::Personal)),
        "męskozwierzęcy" | "męskożywotny" => (Some(Gender::Masculine), Some(Animacy::Animate)),
        "męskorzeczowy" | "męskonieżywotny" => {
            (Some(Gender::Masculine), Some(Animacy::Inanimate))
        }
        _ => (None, None),
    }
}

/// The heading up to its first cross-reference.
///
/// Comma and semicolon segments are kept until one opens with a
/// cross-reference; a cross-reference inside a segment cuts it there.
pub fn heading_core(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for segment in text.split([',', ';']) {
        let cut = CROSS_REFERENCES
            .iter()
            .filter_map(|marker| find_token(segment, marker))
            .min();
        match cut {
            Some(at) => {
                kept.push(&segment[..at]);
                break;
            }
            None => kept.push(segment),
        }
    }
    kept.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Byte offset of the first occurrence of `marker` that stands as a whole
/// token, not inside a longer word.
fn find_token(text: &str, marker: &str) -> Option<usize> {
    text.match_indices(marker).map(|(at, _)| at).find(|&at| {
        let before = text[..at].chars().next_back();
        let after = text[at + marker.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric)
            && !(marker.ends_with(char::is_alphanumeric) && after.is_some_and(char::is_alphanumeric))
    })
}
