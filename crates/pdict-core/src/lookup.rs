//! The lookup pipeline: resolve, fetch, identify, build.

use pdict_ingest::{PageSource, PageTable, fetch_tables};
use pdict_map::{GrammarProperties, interpret};
use pdict_model::{BuildOptions, MorphologicalForms, RawTable, ResolverOptions, StructureError};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::error::LookupError;
use crate::resolve::{LemmaResolution, LemmaResolver};

/// What became of one table on the lemma page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TableOutcome {
    Interpreted(MorphologicalForms),
    /// The layout could not be identified; the raw table is kept for display.
    Fallback {
        heading: Option<String>,
        error: StructureError,
        table: RawTable,
    },
    /// The table sits under no noun, verb or adjective heading.
    Skipped { heading: Option<String> },
}

/// Everything found for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupReport {
    pub query: String,
    pub resolution: LemmaResolution,
    pub tables: Vec<TableOutcome>,
}

impl LookupReport {
    pub fn lemma(&self) -> Option<&str> {
        self.resolution.lemma()
    }

    /// Paradigms that were built.
    pub fn paradigms(&self) -> impl Iterator<Item = &MorphologicalForms> {
        self.tables.iter().filter_map(|outcome| match outcome {
            TableOutcome::Interpreted(forms) => Some(forms),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    NoResults { query: String },
    Found(LookupReport),
}

/// Runs lookups against a page source.
pub struct Lookup<'a> {
    source: &'a dyn PageSource,
    resolver: ResolverOptions,
    build: BuildOptions,
}

impl<'a> Lookup<'a> {
    pub fn new(source: &'a dyn PageSource) -> Self {
        Self {
            source,
            resolver: ResolverOptions::default(),
            build: BuildOptions::default(),
        }
    }

    pub fn with_resolver_options(mut self, options: ResolverOptions) -> Self {
        self.resolver = options;
        self
    }

    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build = options;
        self
    }

    /// Looks up `query`: resolves it to a lemma page and interprets every
    /// table on that page.
    ///
    /// Only resolution failures are errors. A table whose layout cannot be
    /// identified is returned raw as [`TableOutcome::Fallback`].
    pub fn run(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        let _span = info_span!("lookup", query).entered();

        let resolver = LemmaResolver::new(self.source, self.resolver);
        let page = resolver
            .resolve_page(query)
            .map_err(|source| LookupError::Resolve {
                query: query.to_string(),
                source,
            })?;
        let Some(page) = page else {
            return Ok(LookupOutcome::NoResults {
                query: query.to_string(),
            });
        };

        let lemma = page.resolution.lemma().unwrap_or(query).to_string();
        let tables: Vec<TableOutcome> = fetch_tables(&page.html)
            .into_iter()
            .map(|table| self.interpret_table(&lemma, table))
            .collect();
        debug!(lemma, tables = tables.len(), "lookup complete");

        Ok(LookupOutcome::Found(LookupReport {
            query: query.to_string(),
            resolution: page.resolution,
            tables,
        }))
    }

    fn interpret_table(&self, lemma: &str, page_table: PageTable) -> TableOutcome {
        let PageTable { pos_heading, table } = page_table;
        let props = pos_heading
            .as_deref()
            .map(GrammarProperties::from_heading)
            .unwrap_or_default();
        let Some(word_class) = props.word_class else {
            debug!(heading = ?pos_heading, "no word class for table");
            return TableOutcome::Skipped {
                heading: pos_heading,
            };
        };

        match interpret(&table, word_class, lemma, &self.build) {
            Ok(forms) => TableOutcome::Interpreted(
                forms
                    .with_aspect(props.aspect)
                    .with_gender(props.gender)
                    .with_animacy(props.animacy),
            ),
            Err(error) => {
                info!(lemma, %error, "keeping raw table");
                TableOutcome::Fallback {
                    heading: pos_heading,
                    error,
                    table,
                }
            }
        }
    }
}
