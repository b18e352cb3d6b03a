//! CLI argument definitions for polishdict.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pdict_ingest::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENGLISH_ENDPOINT, WikiOptions};
use pdict_model::{BuildOptions, ResolverOptions, WordClass};

#[derive(Parser)]
#[command(
    name = "polishdict",
    version,
    about = "Polish dictionary - inflection tables from Wiktionary",
    long_about = "Look up Polish words on Wiktionary and print their conjugation or\n\
                  declension as structured data.\n\n\
                  Inflected forms are resolved to their dictionary headword, and\n\
                  words typed without Polish diacritics are retried with them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a word and print its inflection tables.
    Lookup(LookupArgs),

    /// Print the headword a word resolves to.
    Resolve(ResolveArgs),

    /// Interpret an inflection table stored as CSV.
    Interpret(InterpretArgs),
}

/// Where and how to reach the wiki.
#[derive(Args)]
pub struct WikiArgs {
    /// MediaWiki API endpoint.
    #[arg(long = "wiki-url", value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub wiki_url: String,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Also try the lowercase and capitalized spellings of the word.
    #[arg(long = "case-fallback")]
    pub case_fallback: bool,

    /// Fetch pages missing from the primary wiki from English Wiktionary.
    #[arg(long = "english-fallback")]
    pub english_fallback: bool,
}

impl WikiArgs {
    pub fn wiki_options(&self) -> WikiOptions {
        WikiOptions::new()
            .with_endpoint(self.wiki_url.clone())
            .with_timeout_secs(self.timeout_secs)
    }

    /// Options for the English fallback wiki, when enabled.
    pub fn english_options(&self) -> Option<WikiOptions> {
        self.english_fallback
            .then(|| self.wiki_options().with_endpoint(ENGLISH_ENDPOINT))
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions::new().with_case_fallback(self.case_fallback)
    }
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Word to look up, in any inflected form.
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub wiki: WikiArgs,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Word to resolve.
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub wiki: WikiArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct InterpretArgs {
    /// CSV file holding the table, one record per row, labels included.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Word class of the table.
    #[arg(long = "class", value_enum)]
    pub word_class: WordClassArg,

    /// Headword the table belongs to.
    #[arg(long = "lemma", value_name = "LEMMA")]
    pub lemma: String,

    #[command(flatten)]
    pub build: BuildArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Mean stem share below which singular and plural count as suppletive.
    #[arg(long = "suppletion-threshold", value_name = "RATIO", default_value_t = 0.2)]
    pub suppletion_threshold: f64,
}

impl BuildArgs {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::new().with_suppletion_threshold(self.suppletion_threshold)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum WordClassArg {
    Noun,
    Verb,
    Adjective,
}

impl From<WordClassArg> for WordClass {
    fn from(arg: WordClassArg) -> Self {
        match arg {
            WordClassArg::Noun => WordClass::Noun,
            WordClassArg::Verb => WordClass::Verb,
            WordClassArg::Adjective => WordClass::Adjective,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
