//! Query classification for form submission
//!
//! Decides whether a submitted query is an address to open directly or free
//! text to hand to the search engine. The URL test is a lenient heuristic: it
//! accepts things like `node.js` and rejects dotless hosts like `localhost`.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Characters left as-is when encoding a URI component
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)$",
    )
    .expect("URL pattern is a valid regex")
});

/// What a submitted query should turn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Looks like a host or URL; navigate to it directly
    UrlLike,
    /// Anything else; send it to the search engine
    SearchTerm,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::UrlLike => write!(f, "url"),
            QueryKind::SearchTerm => write!(f, "search"),
        }
    }
}

/// A classified query together with the address to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub kind: QueryKind,
    pub url: String,
}

/// Classify a query. Surrounding whitespace is ignored.
pub fn classify(query: &str) -> QueryKind {
    if URL_PATTERN.is_match(query.trim()) {
        QueryKind::UrlLike
    } else {
        QueryKind::SearchTerm
    }
}

/// Percent-encode a string the way `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Address for a URL-like query: `https://` is added unless a scheme is present
pub fn url_target(query: &str) -> String {
    let query = query.trim();
    if query.starts_with("http://") || query.starts_with("https://") {
        query.to_string()
    } else {
        format!("https://{}", query)
    }
}

/// Address for a free-text query on the given search engine prefix
pub fn search_target(query: &str, search_url: &str) -> String {
    format!("{}{}", search_url, encode_component(query.trim()))
}

/// Classify `query` and build the address it should navigate to
pub fn resolve(query: &str, search_url: &str) -> NavigationTarget {
    let kind = classify(query);
    let url = match kind {
        QueryKind::UrlLike => url_target(query),
        QueryKind::SearchTerm => search_target(query, search_url),
    };
    NavigationTarget { kind, url }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
