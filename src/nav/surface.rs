//! Capabilities the controller needs from its host

/// The render target for the search box and its suggestion panel
pub trait SearchSurface {
    /// Current text of the query input
    fn input_value(&self) -> String;

    fn set_input_value(&mut self, value: &str);

    /// Replace the rendered rows. New rows carry no focus marking.
    fn render_rows(&mut self, rows: &[String]);

    /// Show or hide the suggestion panel
    fn set_panel_active(&mut self, active: bool);

    /// Toggle the page-level "search active" mode
    fn set_search_active(&mut self, active: bool);

    /// Mark exactly one row as focused, or none
    fn set_focused_row(&mut self, index: Option<usize>);

    /// Submit the search form with whatever the input currently holds
    fn submit_form(&mut self);
}

/// Performs the final navigation; the controller never waits on it
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Where a pointer click landed, relative to the search widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Panel,
    Outside,
}

/// Keys the suggestion panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}
