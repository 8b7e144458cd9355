//! Suggestion panel state machine
//!
//! Two states: `Idle` (no rows, panel hidden) and `ListVisible` (rows shown,
//! optionally one focused). Whenever the list is replaced or cleared the list
//! changes first and the focus reset follows.

use super::focus::FocusState;
use super::surface::{ClickTarget, NavKey, Navigator, SearchSurface};
use crate::classify::{self, NavigationTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    ListVisible,
}

pub struct SuggestionController<S: SearchSurface> {
    surface: S,
    suggestions: Vec<String>,
    focus: FocusState,
    /// Search engine prefix for free-text submissions
    search_url: String,
}

impl<S: SearchSurface> SuggestionController<S> {
    pub fn new(surface: S, search_url: impl Into<String>) -> Self {
        Self {
            surface,
            suggestions: Vec::new(),
            focus: FocusState::new(),
            search_url: search_url.into(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus.get()
    }

    pub fn state(&self) -> PanelState {
        if self.suggestions.is_empty() {
            PanelState::Idle
        } else {
            PanelState::ListVisible
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state() == PanelState::ListVisible
    }

    /// Toggle search-active mode from the (untrimmed) input text
    pub fn on_input_changed(&mut self, query: &str) {
        self.surface.set_search_active(!query.trim().is_empty());
    }

    /// Show a freshly fetched list, or go idle if it is empty
    pub fn on_suggestions_available(&mut self, suggestions: Vec<String>) {
        if suggestions.is_empty() {
            self.clear();
            return;
        }

        self.suggestions = suggestions;
        self.focus.clear();
        self.surface.render_rows(&self.suggestions);
        self.surface.set_panel_active(true);
    }

    /// Drop the list and hide the panel
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.focus.clear();
        self.surface.render_rows(&[]);
        self.surface.set_panel_active(false);
    }

    /// Returns true if the key was consumed
    pub fn on_arrow_down(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.focus.next(self.suggestions.len());
        self.surface.set_focused_row(self.focus.get());
        true
    }

    /// Returns true if the key was consumed
    pub fn on_arrow_up(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.focus.previous(self.suggestions.len());
        self.surface.set_focused_row(self.focus.get());
        true
    }

    /// Commit the focused row. Without a focused row nothing happens and the
    /// key is left for the host's default handling.
    pub fn on_enter(&mut self) -> bool {
        let Some(phrase) = self
            .focus
            .get()
            .and_then(|index| self.suggestions.get(index))
            .cloned()
        else {
            return false;
        };

        self.commit(&phrase);
        true
    }

    /// Hide the list whatever is focused. Returns true if a list was showing.
    pub fn on_escape(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.clear();
        was_visible
    }

    /// Commit row `index`. Returns false for a row that does not exist.
    pub fn on_click_item(&mut self, index: usize) -> bool {
        let Some(phrase) = self.suggestions.get(index).cloned() else {
            return false;
        };

        self.commit(&phrase);
        true
    }

    /// Clicks anywhere but the input and the panel dismiss the list
    pub fn on_outside_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside && self.is_visible() {
            self.clear();
        }
    }

    /// Dispatch a navigation key. Returns true if it was consumed.
    pub fn on_key(&mut self, key: NavKey) -> bool {
        if !self.is_visible() {
            return false;
        }

        match key {
            NavKey::Down => self.on_arrow_down(),
            NavKey::Up => self.on_arrow_up(),
            NavKey::Enter => self.on_enter(),
            NavKey::Escape => self.on_escape(),
        }
    }

    /// Handle a form submission: open the query as an address or search for it
    ///
    /// Always replaces the default submit behaviour, so there is nothing for
    /// the caller to fall back to. A blank query resolves to the bare search
    /// prefix; the terminal host filters blank input before calling this.
    pub fn on_form_submit<N: Navigator>(
        &mut self,
        raw_query: &str,
        navigator: &mut N,
    ) -> NavigationTarget {
        let target = classify::resolve(raw_query.trim(), &self.search_url);
        log::debug!("Submitting {:?} as {} -> {}", raw_query, target.kind, target.url);
        navigator.navigate(&target.url);
        target
    }

    fn commit(&mut self, phrase: &str) {
        self.surface.set_input_value(phrase);
        self.clear();
        self.surface.submit_form();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
