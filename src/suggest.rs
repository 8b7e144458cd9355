//! Suggestion fetching
//!
//! Turns typed queries into debounced requests against a suggestion source and
//! hands the results back to the UI thread in the order the queries were typed.

mod debouncer;
mod fetcher;
mod source;

use thiserror::Error;

pub use debouncer::Debouncer;
pub use fetcher::{FetchResponse, RequestOutcome, SuggestionFetcher, fetch_outcome};
pub use source::{HttpSuggestionSource, SuggestionSource, build_request_url, parse_phrases};

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Source answered with a non-success status
    #[error("HTTP error! Status: {code}")]
    Status { code: u16 },

    /// Body was not a list of phrase objects
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configured endpoint could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result of one suggestion fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one phrase, in source order
    Suggestions(Vec<String>),
    /// Valid response without phrases, or an empty query
    Empty,
    Failed(FetchError),
}

impl FetchOutcome {
    /// The list to display. Empty results and failures both clear the panel.
    pub fn into_display_list(self) -> Vec<String> {
        match self {
            FetchOutcome::Suggestions(phrases) => phrases,
            FetchOutcome::Empty => Vec::new(),
            FetchOutcome::Failed(e) => {
                log::warn!("Error fetching suggestions: {}", e);
                Vec::new()
            }
        }
    }
}

impl From<Result<Vec<String>, FetchError>> for FetchOutcome {
    fn from(result: Result<Vec<String>, FetchError>) -> Self {
        match result {
            Ok(phrases) if phrases.is_empty() => FetchOutcome::Empty,
            Ok(phrases) => FetchOutcome::Suggestions(phrases),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}
