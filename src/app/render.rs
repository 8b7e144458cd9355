use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use super::state::App;
use crate::suggest::SuggestionSource;
use crate::widgets::popup;

// Start page display constants
const MAX_INPUT_WIDTH: u16 = 72;
const INPUT_HEIGHT: u16 = 3;
const ACTIVE_INPUT_ROW: u16 = 3;
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const POPUP_BORDER_HEIGHT: u16 = 2;
const FOCUS_MARKER: &str = "► ";
const ROW_PADDING: &str = "  ";

const TITLE: &str = "ikigai";
const KEY_HINTS: &str = "↑/↓ select   Enter open   Esc close   Ctrl+C quit";

impl<S: SuggestionSource> App<S> {
    /// Render the start page
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.layout_regions.clear();
        self.panel_offset = 0;
        if area.height < INPUT_HEIGHT + 1 || area.width < 8 {
            return;
        }

        let status_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        let page = Rect { height: area.height - 1, ..area };

        let search_active = self.controller.surface().is_search_active();
        let input_y = if search_active {
            page.y + ACTIVE_INPUT_ROW.min(page.height.saturating_sub(INPUT_HEIGHT))
        } else {
            page.y + page.height.saturating_sub(INPUT_HEIGHT) / 2
        };
        let input_width = page.width.saturating_sub(4).min(MAX_INPUT_WIDTH);
        let input_area = popup::centered_at_row(page, input_width, INPUT_HEIGHT, input_y);

        self.render_title(frame, input_area);
        self.render_input_field(frame, input_area, search_active);
        self.layout_regions.input_field = Some(input_area);

        if self.controller.surface().is_panel_active() {
            self.render_suggestions(frame, input_area, page);
        }

        self.render_status(frame, status_area);
    }

    fn render_title(&self, frame: &mut Frame, input_area: Rect) {
        if input_area.y < 2 {
            return;
        }
        let title_area = Rect { y: input_area.y - 2, height: 1, ..input_area };
        let title = Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect, search_active: bool) {
        // Set border color based on search mode
        let border_color = if search_active {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let textarea = &mut self.controller.surface_mut().input.textarea;
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&*textarea, area);
    }

    fn render_suggestions(&mut self, frame: &mut Frame, input_area: Rect, bounds: Rect) {
        let surface = self.controller.surface();
        let rows = surface.rows();
        if rows.is_empty() {
            return;
        }

        let visible_count = rows.len().min(MAX_VISIBLE_SUGGESTIONS);
        let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
        let popup_area = popup::popup_below_anchor(input_area, popup_height, bounds);
        if popup_area.height <= POPUP_BORDER_HEIGHT {
            return;
        }

        let shown = usize::from(popup_area.height - POPUP_BORDER_HEIGHT);
        let focused = surface.focused_row();
        // Scroll just enough to keep the focused row on screen
        let offset = focused.map_or(0, |index| (index + 1).saturating_sub(shown));
        let text_width = usize::from(popup_area.width.saturating_sub(POPUP_BORDER_HEIGHT))
            .saturating_sub(FOCUS_MARKER.chars().count());

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(shown)
            .map(|(index, phrase)| {
                let text = truncate_to_width(phrase, text_width);
                if focused == Some(index) {
                    let style = Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD);
                    ListItem::new(Line::from(vec![
                        Span::styled(FOCUS_MARKER, style),
                        Span::styled(text, style),
                    ]))
                    .style(style)
                } else {
                    ListItem::new(Line::from(vec![
                        Span::raw(ROW_PADDING),
                        Span::styled(text, Style::default().fg(Color::White)),
                    ]))
                }
            })
            .collect();

        popup::clear_area(frame, popup_area);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, popup_area);

        self.layout_regions.suggestion_panel = Some(popup_area);
        self.panel_offset = offset;
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

/// Cut `text` to at most `max_width` display columns, ending in "…" if cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width - 1 {
            break;
        }
        width += char_width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
