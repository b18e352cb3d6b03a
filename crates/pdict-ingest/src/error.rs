//! Error types for page retrieval and table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching a wiki page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The wiki has no page with this title.
    #[error("page not found: {title}")]
    NotFound { title: String },

    /// The request failed or the server answered with an error status.
    #[error("request for {title} failed: {source}")]
    Http {
        title: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with an error object other than a missing page.
    #[error("wiki API error {code}: {info}")]
    Api { code: String, info: String },

    /// The response body was not the expected JSON.
    #[error("could not decode response for {title}: {source}")]
    Decode {
        title: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// True when the page simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors raised while loading a table from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Table file not found.
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file holds no rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, IngestError>;
