//! Mouse click handling
//!
//! Routes left clicks on the suggestion panel to the controller.

use super::state::App;
use crate::layout::Region;
use crate::nav::ClickTarget;
use crate::suggest::SuggestionSource;

/// Handle left mouse button click for the given region
pub fn handle_click<S: SuggestionSource>(app: &mut App<S>, region: Option<Region>) {
    match region {
        Some(Region::SuggestionRow(row)) => {
            // Rows past the list end are empty panel space
            if !app.controller.on_click_item(app.panel_offset + row) {
                app.controller.on_outside_click(ClickTarget::Panel);
            }
        }
        Some(Region::SuggestionPanel) => app.controller.on_outside_click(ClickTarget::Panel),
        Some(Region::InputField) => app.controller.on_outside_click(ClickTarget::Input),
        None => app.controller.on_outside_click(ClickTarget::Outside),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
