//! Interpreted paradigms.
//!
//! Each word class has its own nesting of dimension values, so a paradigm is
//! a sum type over word classes rather than one permissive mapping. Leaves
//! distinguish a single attested form, an attested gap, and a set of
//! classified variants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::enums::{
    Animacy, Aspect, Case, Comparison, Gender, GenderClass, NonFinite, Number, Person, Series,
    WordClass,
};
use crate::error::BuildError;

/// Register of one surface form within a variant leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormClass {
    Primary,
    Archaic,
    Regional,
    Dialect(String),
}

impl FormClass {
    pub fn as_str(&self) -> &str {
        match self {
            FormClass::Primary => "primary",
            FormClass::Archaic => "archaic",
            FormClass::Regional => "regional",
            FormClass::Dialect(name) => name,
        }
    }
}

impl fmt::Display for FormClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FormClass {
    fn from(value: &str) -> Self {
        match value {
            "primary" => FormClass::Primary,
            "archaic" => FormClass::Archaic,
            "regional" => FormClass::Regional,
            other => FormClass::Dialect(other.to_string()),
        }
    }
}

impl Serialize for FormClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FormClass::from(raw.as_str()))
    }
}

/// Value stored at a complete dimension tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Form(String),
    /// The combination is attested as not existing; serialized as `null`.
    Inapplicable,
    Variants(BTreeMap<FormClass, String>),
}

impl FormValue {
    pub fn form(text: impl Into<String>) -> Self {
        FormValue::Form(text.into())
    }

    /// The single form, or the primary one of a variant set.
    pub fn primary(&self) -> Option<&str> {
        match self {
            FormValue::Form(text) => Some(text),
            FormValue::Inapplicable => None,
            FormValue::Variants(variants) => variants
                .get(&FormClass::Primary)
                .or_else(|| variants.values().next())
                .map(String::as_str),
        }
    }

    pub fn is_inapplicable(&self) -> bool {
        matches!(self, FormValue::Inapplicable)
    }

    /// Every surface form held by the leaf.
    pub fn surface_forms(&self) -> Vec<&str> {
        match self {
            FormValue::Form(text) => vec![text.as_str()],
            FormValue::Inapplicable => Vec::new(),
            FormValue::Variants(variants) => variants.values().map(String::as_str).collect(),
        }
    }
}

impl PartialEq<&str> for FormValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, FormValue::Form(text) if text == other)
    }
}

pub type CaseForms = BTreeMap<Case, FormValue>;
pub type PersonForms = BTreeMap<Person, FormValue>;

/// number → case
pub type NounForms = BTreeMap<Number, CaseForms>;

/// comparison → number → gender class → case
pub type AdjectiveForms = BTreeMap<Comparison, BTreeMap<Number, BTreeMap<GenderClass, CaseForms>>>;

/// One verb series; past and conditional nest gender above number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SeriesForms {
    Plain(BTreeMap<Number, PersonForms>),
    Gendered(BTreeMap<Gender, BTreeMap<Number, PersonForms>>),
}

impl SeriesForms {
    pub fn for_series(series: Series) -> Self {
        if series.is_gendered() {
            SeriesForms::Gendered(BTreeMap::new())
        } else {
            SeriesForms::Plain(BTreeMap::new())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerbForms {
    #[serde(flatten)]
    pub series: BTreeMap<Series, SeriesForms>,
    #[serde(flatten)]
    pub non_finite: BTreeMap<NonFinite, FormValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "word_class", content = "forms", rename_all = "snake_case")]
pub enum Paradigm {
    Verb(VerbForms),
    Noun(NounForms),
    Adjective(AdjectiveForms),
}

impl Paradigm {
    pub fn empty(word_class: WordClass) -> Self {
        match word_class {
            WordClass::Verb => Paradigm::Verb(VerbForms::default()),
            WordClass::Noun => Paradigm::Noun(NounForms::new()),
            WordClass::Adjective => Paradigm::Adjective(AdjectiveForms::new()),
        }
    }

    pub fn word_class(&self) -> WordClass {
        match self {
            Paradigm::Verb(_) => WordClass::Verb,
            Paradigm::Noun(_) => WordClass::Noun,
            Paradigm::Adjective(_) => WordClass::Adjective,
        }
    }
}

/// Advisory annotations; never needed to read the forms themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub irregular: bool,
    pub suppletive: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Unclassified extra forms, keyed by dotted leaf path.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub alternatives: BTreeMap<String, Vec<String>>,
    /// Cells that could not be placed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<BuildError>,
}

/// One interpreted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphologicalForms {
    pub lemma: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<Aspect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animacy: Option<Animacy>,
    #[serde(flatten)]
    pub forms: Paradigm,
    pub metadata: Metadata,
}

impl MorphologicalForms {
    pub fn new(lemma: impl Into<String>, forms: Paradigm) -> Self {
        Self {
            lemma: lemma.into(),
            aspect: None,
            gender: None,
            animacy: None,
            forms,
            metadata: Metadata::default(),
        }
    }

    pub fn with_aspect(mut self, aspect: Option<Aspect>) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_animacy(mut self, animacy: Option<Animacy>) -> Self {
        self.animacy = animacy;
        self
    }

    pub fn word_class(&self) -> WordClass {
        self.forms.word_class()
    }

    /// Every leaf with its dotted path, in canonical order.
    pub fn leaves(&self) -> Vec<(String, &FormValue)> {
        let mut out = Vec::new();
        match &self.forms {
            Paradigm::Verb(verb) => {
                verb.series.walk("", &mut out);
                verb.non_finite.walk("", &mut out);
            }
            Paradigm::Noun(noun) => noun.walk("", &mut out),
            Paradigm::Adjective(adjective) => adjective.walk("", &mut out),
        }
        out
    }

    /// Looks up a leaf by dotted path, e.g. `past.neuter.singular.3`.
    pub fn leaf(&self, path: &str) -> Option<&FormValue> {
        self.leaves()
            .into_iter()
            .find(|(p, _)| p == path)
            .map(|(_, value)| value)
    }
}

trait PathKey {
    fn key(&self) -> &str;
}

macro_rules! path_key {
    ($($ty:ty),*) => {
        $(impl PathKey for $ty {
            fn key(&self) -> &str {
                self.as_str()
            }
        })*
    };
}

path_key!(
    Case,
    Number,
    Person,
    Gender,
    GenderClass,
    Comparison,
    Series,
    NonFinite
);

trait Walk {
    fn walk<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FormValue)>);
}

impl Walk for FormValue {
    fn walk<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FormValue)>) {
        out.push((prefix.to_string(), self));
    }
}

impl Walk for SeriesForms {
    fn walk<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FormValue)>) {
        match self {
            SeriesForms::Plain(forms) => forms.walk(prefix, out),
            SeriesForms::Gendered(forms) => forms.walk(prefix, out),
        }
    }
}

impl<K: PathKey, V: Walk> Walk for BTreeMap<K, V> {
    fn walk<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FormValue)>) {
        for (key, value) in self {
            let path = if prefix.is_empty() {
                key.key().to_string()
            } else {
                format!("{prefix}.{}", key.key())
            };
            value.walk(&path, out);
        }
    }
}
