// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://duckduckgo.com/ac/";
pub const DEFAULT_CORS_PROXY: &str = "https://corsproxy.io/?";
pub const DEFAULT_FALLBACK_SEARCH_URL: &str = "https://google.com/search?q=";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Suggestion and navigation configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a fetch is sent
    pub debounce_delay_ms: u64,
    /// Base URL of the suggestion source
    pub search_endpoint: String,
    /// Relay prefix the encoded request URL is appended to. Empty disables it.
    pub cors_proxy: String,
    /// Search engine prefix used for free-text queries
    pub fallback_search_url: String,
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            cors_proxy: DEFAULT_CORS_PROXY.to_string(),
            fallback_search_url: DEFAULT_FALLBACK_SEARCH_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// The relay prefix, if one is configured
    pub fn relay(&self) -> Option<&str> {
        let proxy = self.cors_proxy.trim();
        if proxy.is_empty() { None } else { Some(proxy) }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}
