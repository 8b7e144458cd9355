//! Debounced suggestion fetcher
//!
//! Every call to `request_suggestions` issues a new generation. Fetches run on
//! the tokio runtime and report back over a channel; the UI thread drains it
//! with `poll_response`, which drops anything that is not the latest
//! generation.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use super::debouncer::Debouncer;
use super::source::SuggestionSource;
use super::FetchOutcome;

/// What `request_suggestions` did with a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Empty query: nothing was scheduled and the panel should be cleared now
    Cleared,
    /// A fetch is waiting on the debounce timer
    Scheduled { generation: u64 },
}

/// A resolved fetch, tagged with the generation that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: u64,
    pub query: String,
    pub outcome: FetchOutcome,
}

/// Run one fetch against `source` and classify the result
pub async fn fetch_outcome<S: SuggestionSource>(source: &S, query: &str) -> FetchOutcome {
    if query.is_empty() {
        return FetchOutcome::Empty;
    }
    FetchOutcome::from(source.fetch(query).await)
}

pub struct SuggestionFetcher<S: SuggestionSource> {
    source: Arc<S>,
    debouncer: Debouncer,
    /// Latest generation issued; only responses carrying it are applied
    generation: u64,
    /// Responses dropped because a newer query superseded them
    stale_discarded: u64,
    response_tx: UnboundedSender<FetchResponse>,
    response_rx: UnboundedReceiver<FetchResponse>,
}

impl<S: SuggestionSource> SuggestionFetcher<S> {
    pub fn new(source: S, delay: Duration, handle: Handle) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            debouncer: Debouncer::new(delay, handle),
            generation: 0,
            stale_discarded: 0,
            response_tx,
            response_rx,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Latest generation issued
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }

    pub fn has_pending_timer(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// Ask for suggestions for an already-trimmed query
    ///
    /// An empty query cancels the pending timer and supersedes any fetch in
    /// flight without touching the network. Anything else restarts the debounce
    /// window; only the query that survives the window is sent.
    pub fn request_suggestions(&mut self, query: &str) -> RequestOutcome {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        if query.is_empty() {
            self.debouncer.cancel();
            log::debug!("Empty query, cleared suggestions (generation {})", generation);
            return RequestOutcome::Cleared;
        }

        let source = Arc::clone(&self.source);
        let response_tx = self.response_tx.clone();
        let query = query.to_string();

        self.debouncer.schedule(async move {
            log::debug!("Fetching suggestions for {:?} (generation {})", query, generation);
            let outcome = fetch_outcome(source.as_ref(), &query).await;
            // Receiver gone means the UI shut down
            let _ = response_tx.send(FetchResponse {
                generation,
                query,
                outcome,
            });
        });

        RequestOutcome::Scheduled { generation }
    }

    /// Take the next current response without blocking
    pub fn poll_response(&mut self) -> Option<FetchResponse> {
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => {
                    if let Some(response) = self.accept(response) {
                        return Some(response);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    /// Wait for the next current response
    pub async fn next_response(&mut self) -> Option<FetchResponse> {
        while let Some(response) = self.response_rx.recv().await {
            if let Some(response) = self.accept(response) {
                return Some(response);
            }
        }
        None
    }

    fn accept(&mut self, response: FetchResponse) -> Option<FetchResponse> {
        if response.generation == self.generation {
            return Some(response);
        }
        self.stale_discarded += 1;
        log::debug!(
            "Discarding stale suggestions for {:?} (generation {}, current {})",
            response.query,
            response.generation,
            self.generation
        );
        None
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
