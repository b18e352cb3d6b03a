//! MediaWiki `action=parse` client.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::source::{PageSource, RawHtml};

/// Polish Wiktionary API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pl.wiktionary.org/w/api.php";

/// English Wiktionary API endpoint, used as a fallback for pages the Polish
/// edition lacks.
pub const ENGLISH_ENDPOINT: &str = "https://en.wiktionary.org/w/api.php";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for a MediaWiki source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiOptions {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for WikiOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("polishdict/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WikiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

/// Fetches rendered pages from a MediaWiki installation.
pub struct MediaWikiSource {
    client: Client,
    endpoint: String,
}

impl MediaWikiSource {
    pub fn new(options: &WikiOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(options.user_agent.clone())
            .build()
            .map_err(|source| FetchError::Http {
                title: String::new(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint: options.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PageSource for MediaWikiSource {
    fn fetch_page(&self, title: &str) -> Result<RawHtml, FetchError> {
        debug!(title, endpoint = %self.endpoint, "fetching page");

        let http = |source| FetchError::Http {
            title: title.to_string(),
            source,
        };
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("format", "json"),
                ("formatversion", "2"),
                ("disabletoc", "1"),
            ])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(http)?
            .text()
            .map_err(http)?;

        decode_parse_response(title, &body)
    }
}

/// Interprets the JSON body of an `action=parse` request.
pub(crate) fn decode_parse_response(title: &str, body: &str) -> Result<RawHtml, FetchError> {
    let response: ParseResponse =
        serde_json::from_str(body).map_err(|source| FetchError::Decode {
            title: title.to_string(),
            source,
        })?;

    if let Some(error) = response.error {
        if error.code == "missingtitle" || error.code == "invalidtitle" {
            return Err(FetchError::NotFound {
                title: title.to_string(),
            });
        }
        warn!(title, code = %error.code, "wiki API error");
        return Err(FetchError::Api {
            code: error.code,
            info: error.info,
        });
    }

    match response.parse {
        Some(page) => Ok(RawHtml::from(page.text)),
        None => Err(FetchError::NotFound {
            title: title.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builders() {
        let options = WikiOptions::new()
            .with_endpoint("http://localhost/api.php")
            .with_user_agent("test/1.0")
            .with_timeout_secs(3);
        assert_eq!(options.endpoint, "http://localhost/api.php");
        assert_eq!(options.user_agent, "test/1.0");
        assert_eq!(options.timeout_secs, 3);
        assert_eq!(WikiOptions::default().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn client_keeps_its_endpoint() {
        let source = MediaWikiSource::new(&WikiOptions::default()).unwrap();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn decodes_parsed_page() {
        let body = r#"{"parse":{"title":"pies","pageid":1,"text":"<p>pies</p>"}}"#;
        let html = decode_parse_response("pies", body).unwrap();
        assert_eq!(html.as_str(), "<p>pies</p>");
    }

    #[test]
    fn missing_title_is_not_found() {
        let body = r#"{"error":{"code":"missingtitle","info":"The page you specified doesn't exist."}}"#;
        let err = decode_parse_response("psyy", body).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn other_api_errors_are_kept() {
        let body = r#"{"error":{"code":"ratelimited","info":"You've exceeded your rate limit."}}"#;
        let err = decode_parse_response("pies", body).unwrap_err();
        assert!(matches!(err, FetchError::Api { ref code, .. } if code == "ratelimited"));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_parse_response("pies", "<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
