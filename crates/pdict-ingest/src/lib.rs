//! Page retrieval and table extraction for Polish Wiktionary.
//!
//! Pages come from a [`PageSource`]: the live [`MediaWikiSource`] or an
//! in-memory [`MemorySource`], optionally chained with [`FallbackSource`].
//! [`fetch_tables`] turns rendered HTML into
//! [`RawTable`](pdict_model::RawTable)s with their span metadata, and
//! [`form_of`] reads the "inflected form of" relation of a page.

#![deny(unsafe_code)]

mod csv_table;
mod error;
mod html;
mod mediawiki;
mod source;

pub use csv_table::read_csv_table;
pub use error::{FetchError, IngestError, Result};
pub use html::{PageTable, fetch_tables, form_of};
pub use mediawiki::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENGLISH_ENDPOINT, MediaWikiSource, WikiOptions,
};
pub use source::{FallbackSource, MemorySource, PageSource, RawHtml};
