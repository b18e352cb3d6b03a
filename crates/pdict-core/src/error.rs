//! Error types for lemma resolution and lookups.

use pdict_ingest::FetchError;
use thiserror::Error;

/// Errors that end a lemma resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The page source failed for a reason other than a missing page.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The form-of target is itself an inflected form.
    #[error("{title} is a form of {target}, which is itself a form of another entry")]
    FormOfChain { title: String, target: String },

    /// The form-of target has no page.
    #[error("{title} is a form of {target}, but {target} has no page")]
    MissingFormOfTarget { title: String, target: String },
}

/// Errors that abort a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("could not resolve {query}: {source}")]
    Resolve {
        query: String,
        #[source]
        source: ResolveError,
    },
}
