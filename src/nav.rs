//! Suggestion panel navigation
//!
//! The controller owns the displayed suggestion list and the focused row, and
//! drives a host-provided `SearchSurface` to show them.

mod controller;
mod focus;
mod surface;

pub use controller::{PanelState, SuggestionController};
pub use focus::FocusState;
pub use surface::{ClickTarget, NavKey, Navigator, SearchSurface};
