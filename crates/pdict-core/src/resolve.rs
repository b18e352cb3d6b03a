//! Lemma resolution: from an arbitrary query word to the page that holds its
//! inflection tables.
//!
//! The query is first fetched as given. When no page exists, single-letter
//! diacritic substitutions are tried one at a time, leftmost position first.
//! A page that declares itself an inflected form of another entry, and has
//! no inflection table of its own, is followed exactly once.

use pdict_ingest::{FetchError, PageSource, RawHtml, fetch_tables, form_of};
use pdict_map::GrammarProperties;
use pdict_model::ResolverOptions;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ResolveError;

/// Base letters and the accented letters that may replace them, in trial
/// order.
const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['ą']),
    ('c', &['ć']),
    ('e', &['ę']),
    ('l', &['ł']),
    ('n', &['ń']),
    ('o', &['ó']),
    ('s', &['ś']),
    ('z', &['ź', 'ż']),
];

/// Outcome of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "lemma", rename_all = "snake_case")]
pub enum LemmaResolution {
    /// The query is itself a page title.
    Found(String),
    /// The query led to a different page.
    Redirected(String),
    NotFound,
}

impl LemmaResolution {
    pub fn lemma(&self) -> Option<&str> {
        match self {
            Self::Found(lemma) | Self::Redirected(lemma) => Some(lemma),
            Self::NotFound => None,
        }
    }
}

/// A resolution together with the page it landed on.
#[derive(Debug, Clone)]
pub struct ResolvedPage {
    pub resolution: LemmaResolution,
    pub html: RawHtml,
}

/// Replacement characters for `c`, keeping its case.
fn replacements(c: char) -> Vec<char> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let Some((_, targets)) = SUBSTITUTIONS.iter().find(|(base, _)| *base == lower) else {
        return Vec::new();
    };
    if c.is_uppercase() {
        targets
            .iter()
            .filter_map(|t| t.to_uppercase().next())
            .collect()
    } else {
        targets.to_vec()
    }
}

/// Every spelling that differs from `query` by one diacritic substitution,
/// leftmost position first.
pub fn diacritic_variants(query: &str) -> Vec<String> {
    let mut variants = Vec::new();
    for (at, c) in query.char_indices() {
        for replacement in replacements(c) {
            let mut variant = String::with_capacity(query.len() + 1);
            variant.push_str(&query[..at]);
            variant.push(replacement);
            variant.push_str(&query[at + c.len_utf8()..]);
            variants.push(variant);
        }
    }
    variants
}

/// Lowercase and title-case spellings of `query` that differ from it.
fn case_variants(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let mut chars = lower.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    let mut variants: Vec<String> = Vec::new();
    for candidate in [lower, title] {
        if candidate != query && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// Resolves query words against a page source.
pub struct LemmaResolver<'a> {
    source: &'a dyn PageSource,
    options: ResolverOptions,
}

impl<'a> LemmaResolver<'a> {
    pub fn new(source: &'a dyn PageSource, options: ResolverOptions) -> Self {
        Self { source, options }
    }

    /// Resolves `query` to a lemma.
    pub fn resolve(&self, query: &str) -> Result<LemmaResolution, ResolveError> {
        Ok(self
            .resolve_page(query)?
            .map_or(LemmaResolution::NotFound, |page| page.resolution))
    }

    /// Resolves `query` and returns the lemma page, or `None` when no
    /// spelling tried has a page.
    pub fn resolve_page(&self, query: &str) -> Result<Option<ResolvedPage>, ResolveError> {
        let mut candidates = vec![query.to_string()];
        if self.options.case_fallback {
            candidates.extend(case_variants(query));
        }
        candidates.extend(diacritic_variants(query));

        for title in candidates {
            if let Some(html) = self.try_fetch(&title)? {
                debug!(query, %title, "page found");
                return self.follow_form_of(query, title, html).map(Some);
            }
        }

        info!(query, "no page for any spelling");
        Ok(None)
    }

    fn try_fetch(&self, title: &str) -> Result<Option<RawHtml>, FetchError> {
        match self.source.fetch_page(title) {
            Ok(html) => Ok(Some(html)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn follow_form_of(
        &self,
        query: &str,
        title: String,
        html: RawHtml,
    ) -> Result<ResolvedPage, ResolveError> {
        let target = form_of(&html).filter(|target| *target != title);
        let Some(target) = target.filter(|_| !has_own_paradigm(&html)) else {
            let resolution = if title == query {
                LemmaResolution::Found(title)
            } else {
                LemmaResolution::Redirected(title)
            };
            return Ok(ResolvedPage { resolution, html });
        };

        debug!(%title, %target, "following form-of relation");
        let Some(target_html) = self.try_fetch(&target)? else {
            return Err(ResolveError::MissingFormOfTarget { title, target });
        };
        if form_of(&target_html).is_some_and(|next| next != target)
            && !has_own_paradigm(&target_html)
        {
            return Err(ResolveError::FormOfChain { title, target });
        }

        Ok(ResolvedPage {
            resolution: LemmaResolution::Redirected(target),
            html: target_html,
        })
    }
}

/// Whether the page has a table under a noun, verb or adjective heading.
fn has_own_paradigm(html: &RawHtml) -> bool {
    fetch_tables(html).iter().any(|table| {
        table
            .pos_heading
            .as_deref()
            .is_some_and(|heading| GrammarProperties::from_heading(heading).word_class.is_some())
    })
}
