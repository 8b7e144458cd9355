//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, ConfigResult, SearchConfig};

/// Terminal start page with live search suggestions
///
/// Without a subcommand, opens the interactive page and prints the chosen URL
/// on exit.
#[derive(Debug, Parser)]
#[command(name = "ikigai", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file to use instead of ~/.config/ikigai/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet period before a suggestion request is sent
    #[arg(long, global = true, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Suggestion endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Relay prefix for suggestion requests
    #[arg(long, global = true, value_name = "URL", conflicts_with = "no_proxy")]
    pub proxy: Option<String>,

    /// Call the suggestion endpoint directly
    #[arg(long, global = true)]
    pub no_proxy: bool,

    /// Search engine prefix for free-text queries
    #[arg(long, global = true, value_name = "URL")]
    pub search_url: Option<String>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print where a query would navigate to
    Resolve {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Fetch suggestions once and print one per line
    Suggest {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

impl Cli {
    /// Config file contents with command line overrides applied
    pub fn load_config(&self) -> ConfigResult {
        let mut result = match &self.config {
            Some(path) => config::load_config_from_path(path),
            None => config::load_config(),
        };
        self.apply_overrides(&mut result.config.search);
        result
    }

    pub fn apply_overrides(&self, search: &mut SearchConfig) {
        if let Some(ms) = self.debounce_ms {
            search.debounce_delay_ms = ms;
        }
        if let Some(endpoint) = &self.endpoint {
            search.search_endpoint = endpoint.clone();
        }
        if let Some(proxy) = &self.proxy {
            search.cors_proxy = proxy.clone();
        }
        if self.no_proxy {
            search.cors_proxy.clear();
        }
        if let Some(url) = &self.search_url {
            search.fallback_search_url = url.clone();
        }
    }
}

impl Command {
    /// Query words joined back into one string
    pub fn query(&self) -> String {
        match self {
            Command::Resolve { query } | Command::Suggest { query } => query.join(" "),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
