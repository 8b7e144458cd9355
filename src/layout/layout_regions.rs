use ratatui::layout::Rect;

/// Clickable components of the start page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// Panel chrome (border, empty space)
    SuggestionPanel,
    /// A row inside the panel, by position from the top
    SuggestionRow(usize),
}

/// Where components were drawn in the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    /// Only set while the panel is shown
    pub suggestion_panel: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.input_field = None;
        self.suggestion_panel = None;
    }
}
