use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Search or type a URL");

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the text, leaving the cursor at the end
    pub fn set_query(&mut self, value: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(value);
    }

    /// Insert pasted text, flattened to one line
    pub fn paste(&mut self, text: &str) -> bool {
        let flattened = text.replace(['\r', '\n'], " ");
        if flattened.is_empty() {
            return false;
        }
        self.textarea.insert_str(flattened)
    }

    /// Feed an editing key to the textarea. Returns true if the text changed.
    ///
    /// Keys that would start a second line are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(key) {
            return false;
        }
        self.textarea.input(key)
    }
}

fn is_newline_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
