//! Lemma resolution and lookups.
//!
//! [`LemmaResolver`] maps a query word onto the page of its headword and
//! [`Lookup`] runs the whole pipeline: resolve, fetch the page, extract its
//! tables and interpret each one into a paradigm.

#![deny(unsafe_code)]

pub mod error;
pub mod lookup;
pub mod resolve;

pub use error::{LookupError, ResolveError};
pub use lookup::{Lookup, LookupOutcome, LookupReport, TableOutcome};
pub use resolve::{LemmaResolution, LemmaResolver, ResolvedPage, diacritic_variants};
