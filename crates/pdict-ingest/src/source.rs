//! Page sources: anything that can hand back the rendered HTML of a wiki page.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace};

use crate::error::FetchError;

/// Rendered HTML of one wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHtml(String);

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for RawHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for RawHtml {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Retrieves pages by exact title.
///
/// A missing page is reported as [`FetchError::NotFound`]; every other error
/// means the source itself failed.
pub trait PageSource {
    fn fetch_page(&self, title: &str) -> Result<RawHtml, FetchError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_page(&self, title: &str) -> Result<RawHtml, FetchError> {
        (**self).fetch_page(title)
    }
}

#[derive(Debug, Clone)]
enum Stored {
    Page(String),
    ApiError { code: String, info: String },
}

/// In-memory wiki used for offline lookups and tests.
///
/// Every requested title is recorded in order, hits and misses alike.
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: HashMap<String, Stored>,
    attempts: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page under `title`.
    pub fn with_page(mut self, title: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(title.into(), Stored::Page(html.into()));
        self
    }

    /// Makes requests for `title` fail with an API error.
    pub fn with_api_error(
        mut self,
        title: impl Into<String>,
        code: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        self.pages.insert(
            title.into(),
            Stored::ApiError {
                code: code.into(),
                info: info.into(),
            },
        );
        self
    }

    /// Titles requested so far, in request order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_attempts(&self) {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PageSource for MemorySource {
    fn fetch_page(&self, title: &str) -> Result<RawHtml, FetchError> {
        self.attempts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(title.to_string());
        trace!(title, "memory fetch");

        match self.pages.get(title) {
            Some(Stored::Page(html)) => Ok(RawHtml::new(html.clone())),
            Some(Stored::ApiError { code, info }) => Err(FetchError::Api {
                code: code.clone(),
                info: info.clone(),
            }),
            None => Err(FetchError::NotFound {
                title: title.to_string(),
            }),
        }
    }
}

/// Asks `primary` first and turns to `secondary` only for pages `primary`
/// does not have. Other errors from `primary` are returned as they are.
#[derive(Debug)]
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P: PageSource, S: PageSource> FallbackSource<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: PageSource, S: PageSource> PageSource for FallbackSource<P, S> {
    fn fetch_page(&self, title: &str) -> Result<RawHtml, FetchError> {
        match self.primary.fetch_page(title) {
            Err(err) if err.is_not_found() => {
                debug!(title, "not in primary source, trying fallback");
                self.secondary.fetch_page(title)
            }
            result => result,
        }
    }
}
