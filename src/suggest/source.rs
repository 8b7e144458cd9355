//! Suggestion sources
//!
//! `HttpSuggestionSource` talks to a DuckDuckGo-style autocomplete endpoint,
//! optionally through a relay that takes the whole encoded target URL as a
//! suffix.

use std::future::Future;

use serde::Deserialize;

use super::FetchError;
use crate::classify::encode_component;
use crate::config::SearchConfig;

const USER_AGENT: &str = concat!("ikigai/", env!("CARGO_PKG_VERSION"));

/// Something that can turn a query into candidate phrases
pub trait SuggestionSource: Send + Sync + 'static {
    /// Fetch phrases for a non-empty query, in the order the source ranks them
    fn fetch(&self, query: &str) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

#[derive(Debug, Deserialize)]
struct PhraseEntry {
    phrase: String,
}

/// Parse a `[{"phrase": ...}, ...]` body into phrases, keeping source order
pub fn parse_phrases(body: &str) -> Result<Vec<String>, FetchError> {
    let entries: Vec<PhraseEntry> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(entries.into_iter().map(|entry| entry.phrase).collect())
}

/// Compose the request URL for `query`
///
/// Without a relay this is `{endpoint}?q={query}&type=list`. With one, that
/// URL is encoded as a single component and appended to the relay prefix.
pub fn build_request_url(
    endpoint: &str,
    relay: Option<&str>,
    query: &str,
) -> Result<String, FetchError> {
    url::Url::parse(endpoint).map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))?;

    let target = format!("{}?q={}&type=list", endpoint, encode_component(query));
    Ok(match relay {
        Some(prefix) => format!("{}{}", prefix, encode_component(&target)),
        None => target,
    })
}

/// Suggestion source backed by an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: reqwest::Client,
    endpoint: String,
    relay: Option<String>,
}

impl HttpSuggestionSource {
    pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.search_endpoint.clone(),
            relay: config.relay().map(str::to_string),
        })
    }

    pub fn request_url(&self, query: &str) -> Result<String, FetchError> {
        build_request_url(&self.endpoint, self.relay.as_deref(), query)
    }
}

impl SuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let url = self.request_url(query)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_phrases(&body)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
