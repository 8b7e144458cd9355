//! Tests for mouse click handling

use crate::layout::Region;
use crate::test_utils::test_helpers::{MockSource, phrases, test_app};

use super::handle_click;

fn app_with_list() -> crate::app::App<MockSource> {
    let mut app = test_app(&MockSource::new());
    app.controller
        .on_suggestions_available(phrases(&["rust", "ruby", "rugby"]));
    app
}

#[tokio::test]
async fn test_click_row_commits_phrase() {
    let mut app = app_with_list();

    handle_click(&mut app, Some(Region::SuggestionRow(1)));

    assert_eq!(app.query(), "ruby");
    assert!(!app.controller.is_visible());
    assert!(app.controller.surface_mut().take_submit_request());
}

#[tokio::test]
async fn test_click_row_respects_scroll_offset() {
    let mut app = app_with_list();
    app.panel_offset = 1;

    handle_click(&mut app, Some(Region::SuggestionRow(1)));

    assert_eq!(app.query(), "rugby");
}

#[tokio::test]
async fn test_click_empty_row_keeps_list() {
    let mut app = app_with_list();

    handle_click(&mut app, Some(Region::SuggestionRow(7)));

    assert!(app.controller.is_visible());
    assert!(!app.controller.surface_mut().take_submit_request());
}

#[tokio::test]
async fn test_click_panel_border_keeps_list() {
    let mut app = app_with_list();

    handle_click(&mut app, Some(Region::SuggestionPanel));

    assert!(app.controller.is_visible());
}

#[tokio::test]
async fn test_click_input_keeps_list() {
    let mut app = app_with_list();

    handle_click(&mut app, Some(Region::InputField));

    assert!(app.controller.is_visible());
}

#[tokio::test]
async fn test_click_outside_hides_list() {
    let mut app = app_with_list();

    handle_click(&mut app, None);

    assert!(!app.controller.is_visible());
    assert!(!app.controller.surface().is_panel_active());
}

#[tokio::test]
async fn test_click_outside_when_idle() {
    let mut app = test_app(&MockSource::new());

    handle_click(&mut app, None);

    assert!(!app.controller.is_visible());
    assert!(!app.should_quit());
}
