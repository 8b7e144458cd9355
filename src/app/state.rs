use tokio::runtime::Handle;

use super::surface::TerminalSurface;
use crate::config::SearchConfig;
use crate::layout::LayoutRegions;
use crate::nav::{Navigator, SearchSurface, SuggestionController};
use crate::suggest::{SuggestionFetcher, SuggestionSource};

/// Navigation requested by a form submission, handed to the caller on exit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingNavigation {
    url: Option<String>,
}

impl PendingNavigation {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }
}

/// Application state
pub struct App<S: SuggestionSource> {
    pub controller: SuggestionController<TerminalSurface>,
    pub fetcher: SuggestionFetcher<S>,
    pub navigation: PendingNavigation,
    pub layout_regions: LayoutRegions,
    /// First suggestion row drawn in the panel, set by render
    pub panel_offset: usize,
    /// One-line message for the status bar (config warnings)
    pub status: Option<String>,
    pub should_quit: bool,
}

impl<S: SuggestionSource> App<S> {
    /// Create a new App fetching from `source` on the runtime behind `handle`
    pub fn new(source: S, config: &SearchConfig, handle: Handle) -> Self {
        Self {
            controller: SuggestionController::new(
                TerminalSurface::new(),
                config.fallback_search_url.clone(),
            ),
            fetcher: SuggestionFetcher::new(source, config.debounce_delay(), handle),
            navigation: PendingNavigation::default(),
            layout_regions: LayoutRegions::new(),
            panel_offset: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn query(&self) -> String {
        self.controller.surface().input_value()
    }

    /// URL to open once the app exits, if the user submitted something
    pub fn navigation_url(&self) -> Option<&str> {
        self.navigation.url()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
