mod events;
mod mouse_click;
mod render;
mod state;
mod surface;

// Re-export public types
pub use state::{App, PendingNavigation};
pub use surface::TerminalSurface;
