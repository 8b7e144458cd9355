use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::state::App;
use crate::layout::region_at;
use crate::nav::{NavKey, SearchSurface};
use crate::suggest::{RequestOutcome, SuggestionSource};

impl<S: SuggestionSource> App<S> {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                if self.controller.surface_mut().input.paste(&text) {
                    self.on_query_edited();
                }
            }
            _ => {}
        }

        self.process_submit();
    }

    /// Apply every fetched list that is still current
    pub fn poll_suggestions(&mut self) {
        while let Some(response) = self.fetcher.poll_response() {
            self.controller
                .on_suggestions_available(response.outcome.into_display_list());
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(nav_key) = nav_key(key)
            && self.controller.on_key(nav_key)
        {
            return;
        }

        match key.code {
            // Nothing focused: submit what was typed
            KeyCode::Enter => self.controller.surface_mut().submit_form(),
            // Esc with no list showing leaves the page
            KeyCode::Esc => self.should_quit = true,
            _ => {
                if self.controller.surface_mut().input.handle_key(key) {
                    self.on_query_edited();
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region);
        }
    }

    fn on_query_edited(&mut self) {
        let query = self.query();
        self.controller.on_input_changed(&query);

        if self.fetcher.request_suggestions(query.trim()) == RequestOutcome::Cleared {
            self.controller.clear();
        }
    }

    /// Classify and navigate if the surface asked for a submission
    fn process_submit(&mut self) {
        if !self.controller.surface_mut().take_submit_request() {
            return;
        }

        let raw = self.query();
        if raw.trim().is_empty() {
            return;
        }

        let target = self.controller.on_form_submit(&raw, &mut self.navigation);
        log::info!("Navigating to {} ({})", target.url, target.kind);
        self.should_quit = true;
    }
}

/// Enter commits a focused row whatever modifiers are held
fn nav_key(key: KeyEvent) -> Option<NavKey> {
    if key.code == KeyCode::Enter {
        return Some(NavKey::Enter);
    }
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }

    match key.code {
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}
