//! Subcommand implementations.

use anyhow::{Context, Result};
use pdict_core::{LemmaResolution, LemmaResolver, Lookup, LookupOutcome, TableOutcome};
use pdict_ingest::{FallbackSource, MediaWikiSource, PageSource, read_csv_table};
use pdict_map::interpret;
use pdict_model::WordClass;
use tracing::{info, info_span};

use crate::cli::{InterpretArgs, LookupArgs, ResolveArgs, WikiArgs};

fn wiki_source(args: &WikiArgs) -> Result<Box<dyn PageSource>> {
    let primary = MediaWikiSource::new(&args.wiki_options()).context("create wiki client")?;
    let Some(english) = args.english_options() else {
        return Ok(Box::new(primary));
    };
    let secondary = MediaWikiSource::new(&english).context("create English wiki client")?;
    Ok(Box::new(FallbackSource::new(primary, secondary)))
}

pub fn run_lookup(args: &LookupArgs) -> Result<LookupOutcome> {
    let source = wiki_source(&args.wiki)?;
    lookup_with(source.as_ref(), args)
}

/// Runs a lookup against any page source.
pub fn lookup_with(source: &dyn PageSource, args: &LookupArgs) -> Result<LookupOutcome> {
    Lookup::new(source)
        .with_resolver_options(args.wiki.resolver_options())
        .with_build_options(args.build.build_options())
        .run(&args.word)
        .with_context(|| format!("look up {}", args.word))
}

pub fn run_resolve(args: &ResolveArgs) -> Result<LemmaResolution> {
    let source = wiki_source(&args.wiki)?;
    resolve_with(source.as_ref(), args)
}

pub fn resolve_with(source: &dyn PageSource, args: &ResolveArgs) -> Result<LemmaResolution> {
    LemmaResolver::new(source, args.wiki.resolver_options())
        .resolve(&args.word)
        .with_context(|| format!("resolve {}", args.word))
}

/// Interprets a CSV table. A table whose layout cannot be identified comes
/// back as a fallback carrying the raw table.
pub fn run_interpret(args: &InterpretArgs) -> Result<TableOutcome> {
    let _span = info_span!("interpret_csv", path = %args.csv.display()).entered();
    let table = read_csv_table(&args.csv)
        .with_context(|| format!("read table {}", args.csv.display()))?;
    let word_class = WordClass::from(args.word_class);

    Ok(
        match interpret(&table, word_class, &args.lemma, &args.build.build_options()) {
            Ok(forms) => TableOutcome::Interpreted(forms),
            Err(error) => {
                info!(%error, "keeping raw table");
                TableOutcome::Fallback {
                    heading: None,
                    error,
                    table,
                }
            }
        },
    )
}
