//! Closed vocabularies for Polish inflection.
//!
//! Every enum here declares its variants in canonical order, so the derived
//! `Ord` doubles as the order in which paradigm levels are printed and
//! serialized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Part of speech handled by the interpretation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Verb,
    Noun,
    Adjective,
}

impl WordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Verb => "verb",
            WordClass::Noun => "noun",
            WordClass::Adjective => "adjective",
        }
    }

    /// Tags that may appear in a table of this word class, in nesting order.
    pub fn canonical_tags(&self) -> &'static [DimensionTag] {
        match self {
            WordClass::Verb => &[
                DimensionTag::Tense,
                DimensionTag::Mood,
                DimensionTag::Gender,
                DimensionTag::Number,
                DimensionTag::Person,
            ],
            WordClass::Noun => &[DimensionTag::Number, DimensionTag::Case],
            WordClass::Adjective => &[
                DimensionTag::Comparison,
                DimensionTag::Number,
                DimensionTag::Gender,
                DimensionTag::Animacy,
                DimensionTag::Case,
            ],
        }
    }

    /// Groups of tags a table must carry; each group is satisfied by any member.
    ///
    /// Tense/mood (verbs) and comparison (adjectives) are absent because they
    /// can be inferred when a table only covers one series or degree.
    pub fn required_groups(&self) -> &'static [&'static [DimensionTag]] {
        match self {
            WordClass::Verb => &[&[DimensionTag::Number], &[DimensionTag::Person]],
            WordClass::Noun => &[&[DimensionTag::Number], &[DimensionTag::Case]],
            WordClass::Adjective => &[
                &[DimensionTag::Number],
                &[DimensionTag::Case],
                &[DimensionTag::Gender, DimensionTag::Animacy],
            ],
        }
    }

    pub fn allows(&self, tag: DimensionTag) -> bool {
        self.canonical_tags().contains(&tag)
    }

    /// Position of `tag` in the nesting order, outermost first.
    pub fn rank(&self, tag: DimensionTag) -> Option<usize> {
        self.canonical_tags().iter().position(|t| *t == tag)
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordClass {
    type Err = String;

    /// Accepts English names and the Polish part-of-speech words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verb" | "czasownik" => Ok(WordClass::Verb),
            "noun" | "rzeczownik" => Ok(WordClass::Noun),
            "adjective" | "przymiotnik" => Ok(WordClass::Adjective),
            other => Err(format!("unknown word class: {other}")),
        }
    }
}

/// Grammatical dimension a table header can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionTag {
    Case,
    Number,
    Gender,
    Animacy,
    Person,
    Tense,
    Mood,
    Aspect,
    Comparison,
}

impl DimensionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionTag::Case => "case",
            DimensionTag::Number => "number",
            DimensionTag::Gender => "gender",
            DimensionTag::Animacy => "animacy",
            DimensionTag::Person => "person",
            DimensionTag::Tense => "tense",
            DimensionTag::Mood => "mood",
            DimensionTag::Aspect => "aspect",
            DimensionTag::Comparison => "comparison",
        }
    }
}

impl fmt::Display for DimensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins tags for error messages: `case, number`.
pub fn join_tags(tags: &[DimensionTag]) -> String {
    tags.iter()
        .map(DimensionTag::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// mianownik
    Nominative,
    /// dopełniacz
    Genitive,
    /// celownik
    Dative,
    /// biernik
    Accusative,
    /// narzędnik
    Instrumental,
    /// miejscownik
    Locative,
    /// wołacz
    Vocative,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Locative => "locative",
            Case::Vocative => "vocative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }
}

/// Animacy of masculine referents.
///
/// `NonPersonal` is the plural-only "niemęskoosobowy" class (everything but
/// masculine personal), which adjective tables use as a column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animacy {
    Personal,
    Animate,
    Inanimate,
    NonPersonal,
}

impl Animacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Animacy::Personal => "personal",
            Animacy::Animate => "animate",
            Animacy::Inanimate => "inanimate",
            Animacy::NonPersonal => "non_personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "impersonal")]
    Impersonal,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
            Person::Impersonal => "impersonal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Conditional,
    Imperative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Imperfective,
    Perfective,
    Biaspectual,
}

impl Aspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Imperfective => "imperfective",
            Aspect::Perfective => "perfective",
            Aspect::Biaspectual => "biaspectual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Positive,
    Comparative,
    Superlative,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Positive => "positive",
            Comparison::Comparative => "comparative",
            Comparison::Superlative => "superlative",
        }
    }
}

/// A dimension together with one of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "tag", content = "value", rename_all = "snake_case")]
pub enum Label {
    Case(Case),
    Number(Number),
    Gender(Gender),
    Animacy(Animacy),
    Person(Person),
    Tense(Tense),
    Mood(Mood),
    Aspect(Aspect),
    Comparison(Comparison),
}

impl Label {
    pub fn tag(&self) -> DimensionTag {
        match self {
            Label::Case(_) => DimensionTag::Case,
            Label::Number(_) => DimensionTag::Number,
            Label::Gender(_) => DimensionTag::Gender,
            Label::Animacy(_) => DimensionTag::Animacy,
            Label::Person(_) => DimensionTag::Person,
            Label::Tense(_) => DimensionTag::Tense,
            Label::Mood(_) => DimensionTag::Mood,
            Label::Aspect(_) => DimensionTag::Aspect,
            Label::Comparison(_) => DimensionTag::Comparison,
        }
    }

    pub fn value_str(&self) -> &'static str {
        match self {
            Label::Case(v) => v.as_str(),
            Label::Number(v) => v.as_str(),
            Label::Gender(v) => v.as_str(),
            Label::Animacy(v) => v.as_str(),
            Label::Person(v) => v.as_str(),
            Label::Tense(v) => match v {
                Tense::Present => "present",
                Tense::Past => "past",
                Tense::Future => "future",
            },
            Label::Mood(v) => match v {
                Mood::Indicative => "indicative",
                Mood::Conditional => "conditional",
                Mood::Imperative => "imperative",
            },
            Label::Aspect(v) => v.as_str(),
            Label::Comparison(v) => v.as_str(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag(), self.value_str())
    }
}

/// Outermost level of a verb paradigm: a tense of the indicative or a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    Present,
    Past,
    Future,
    Imperative,
    Conditional,
}

impl Series {
    pub fn as_str(&self) -> &'static str {
        match self {
            Series::Present => "present",
            Series::Past => "past",
            Series::Future => "future",
            Series::Imperative => "imperative",
            Series::Conditional => "conditional",
        }
    }

    /// Past and conditional forms agree in gender with the subject.
    pub fn is_gendered(&self) -> bool {
        matches!(self, Series::Past | Series::Conditional)
    }

    /// A non-indicative mood wins over a tense; a bare indicative is present.
    pub fn from_parts(tense: Option<Tense>, mood: Option<Mood>) -> Option<Series> {
        match (tense, mood) {
            (_, Some(Mood::Imperative)) => Some(Series::Imperative),
            (_, Some(Mood::Conditional)) => Some(Series::Conditional),
            (Some(Tense::Present), _) => Some(Series::Present),
            (Some(Tense::Past), _) => Some(Series::Past),
            (Some(Tense::Future), _) => Some(Series::Future),
            (None, Some(Mood::Indicative)) => Some(Series::Present),
            (None, None) => None,
        }
    }
}

/// Verb forms that sit outside the person/number grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinite {
    Infinitive,
    AdjectivalParticiple,
    ActiveAdjectivalParticiple,
    PassiveAdjectivalParticiple,
    ContemporaryAdverbialParticiple,
    AnteriorAdverbialParticiple,
    VerbalNoun,
    ImpersonalPast,
}

impl NonFinite {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonFinite::Infinitive => "infinitive",
            NonFinite::AdjectivalParticiple => "adjectival_participle",
            NonFinite::ActiveAdjectivalParticiple => "active_adjectival_participle",
            NonFinite::PassiveAdjectivalParticiple => "passive_adjectival_participle",
            NonFinite::ContemporaryAdverbialParticiple => "contemporary_adverbial_participle",
            NonFinite::AnteriorAdverbialParticiple => "anterior_adverbial_participle",
            NonFinite::VerbalNoun => "verbal_noun",
            NonFinite::ImpersonalPast => "impersonal_past",
        }
    }
}

/// Gender/animacy level of an adjective paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderClass {
    Masculine,
    MasculinePersonal,
    MasculineAnimate,
    MasculineInanimate,
    Feminine,
    Neuter,
    NonMasculinePersonal,
}

impl GenderClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderClass::Masculine => "masculine",
            GenderClass::MasculinePersonal => "masculine_personal",
            GenderClass::MasculineAnimate => "masculine_animate",
            GenderClass::MasculineInanimate => "masculine_inanimate",
            GenderClass::Feminine => "feminine",
            GenderClass::Neuter => "neuter",
            GenderClass::NonMasculinePersonal => "non_masculine_personal",
        }
    }

    /// Combines the gender and animacy labels active for one column.
    ///
    /// Animacy alone implies masculine, except the non-personal plural class.
    pub fn from_parts(gender: Option<Gender>, animacy: Option<Animacy>) -> Option<GenderClass> {
        match (gender, animacy) {
            (Some(Gender::Feminine), _) => Some(GenderClass::Feminine),
            (Some(Gender::Neuter), _) => Some(GenderClass::Neuter),
            (_, Some(Animacy::NonPersonal)) => Some(GenderClass::NonMasculinePersonal),
            (_, Some(Animacy::Personal)) => Some(GenderClass::MasculinePersonal),
            (_, Some(Animacy::Animate)) => Some(GenderClass::MasculineAnimate),
            (_, Some(Animacy::Inanimate)) => Some(GenderClass::MasculineInanimate),
            (Some(Gender::Masculine), None) => Some(GenderClass::Masculine),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_class_parses_polish_names() {
        assert_eq!("rzeczownik".parse::<WordClass>(), Ok(WordClass::Noun));
        assert_eq!(" Czasownik ".parse::<WordClass>(), Ok(WordClass::Verb));
        assert_eq!("adjective".parse::<WordClass>(), Ok(WordClass::Adjective));
        assert!("przysłówek".parse::<WordClass>().is_err());
    }

    #[test]
    fn verbs_never_require_case_and_nouns_never_tense() {
        assert!(!WordClass::Verb.allows(DimensionTag::Case));
        assert!(!WordClass::Noun.allows(DimensionTag::Tense));
        assert_eq!(WordClass::Noun.rank(DimensionTag::Number), Some(0));
    }

    #[test]
    fn series_prefers_marked_mood() {
        assert_eq!(
            Series::from_parts(Some(Tense::Past), Some(Mood::Conditional)),
            Some(Series::Conditional)
        );
        assert_eq!(
            Series::from_parts(None, Some(Mood::Indicative)),
            Some(Series::Present)
        );
        assert_eq!(Series::from_parts(None, None), None);
        assert!(Series::Past.is_gendered());
        assert!(!Series::Future.is_gendered());
    }

    #[test]
    fn gender_class_combines_labels() {
        assert_eq!(
            GenderClass::from_parts(Some(Gender::Masculine), Some(Animacy::Personal)),
            Some(GenderClass::MasculinePersonal)
        );
        assert_eq!(
            GenderClass::from_parts(None, Some(Animacy::NonPersonal)),
            Some(GenderClass::NonMasculinePersonal)
        );
        assert_eq!(
            GenderClass::from_parts(Some(Gender::Neuter), None),
            Some(GenderClass::Neuter)
        );
    }

    #[test]
    fn label_serializes_tag_and_value() {
        let json = serde_json::to_string(&Label::Person(Person::First)).unwrap();
        assert_eq!(json, r#"{"tag":"person","value":"1"}"#);
    }
}
