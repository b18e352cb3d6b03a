#![deny(unsafe_code)]

pub mod builder;
pub mod labels;
pub mod pos;
pub mod structure;
pub mod variants;

use pdict_model::{BuildOptions, MorphologicalForms, RawTable, StructureError, WordClass};
use tracing::info_span;

pub use builder::{build, build_with, stem_share};
pub use labels::{Classification, classify, classify_non_finite};
pub use pos::GrammarProperties;
pub use structure::identify;
pub use variants::{ParsedCell, parse_cell};

/// Identifies and builds one table.
pub fn interpret(
    table: &RawTable,
    word_class: WordClass,
    lemma: &str,
    options: &BuildOptions,
) -> Result<MorphologicalForms, StructureError> {
    let _span = info_span!("interpret", %word_class, lemma).entered();
    let layout = identify(table, word_class)?;
    Ok(build_with(table, &layout, word_class, lemma, options))
}
