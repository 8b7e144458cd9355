//! Terminal implementation of the search surface
//!
//! Holds the display state the controller asks for; `App::render` draws it.

use crate::input::InputState;
use crate::nav::SearchSurface;

pub struct TerminalSurface {
    pub input: InputState,
    rows: Vec<String>,
    panel_active: bool,
    search_active: bool,
    focused_row: Option<usize>,
    /// Set by `submit_form`, consumed by the event loop
    submit_requested: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            rows: Vec::new(),
            panel_active: false,
            search_active: false,
            focused_row: None,
            submit_requested: false,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_panel_active(&self) -> bool {
        self.panel_active
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn focused_row(&self) -> Option<usize> {
        self.focused_row
    }

    /// Returns true once per `submit_form` call
    pub fn take_submit_request(&mut self) -> bool {
        std::mem::take(&mut self.submit_requested)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSurface for TerminalSurface {
    fn input_value(&self) -> String {
        self.input.query().to_string()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input.set_query(value);
    }

    fn render_rows(&mut self, rows: &[String]) {
        self.rows = rows.to_vec();
        self.focused_row = None;
    }

    fn set_panel_active(&mut self, active: bool) {
        self.panel_active = active;
    }

    fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    fn set_focused_row(&mut self, index: Option<usize>) {
        self.focused_row = index.filter(|&i| i < self.rows.len());
    }

    fn submit_form(&mut self) {
        self.submit_requested = true;
    }
}
