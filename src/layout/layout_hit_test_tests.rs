//! Tests for region hit testing

use ratatui::layout::Rect;

use super::*;

fn regions() -> LayoutRegions {
    LayoutRegions {
        input_field: Some(Rect::new(20, 10, 60, 3)),
        suggestion_panel: Some(Rect::new(20, 13, 60, 5)),
    }
}

#[test]
fn test_click_in_input_field() {
    assert_eq!(region_at(&regions(), 30, 11), Some(Region::InputField));
    assert_eq!(region_at(&regions(), 20, 10), Some(Region::InputField));
}

#[test]
fn test_click_on_rows() {
    assert_eq!(region_at(&regions(), 30, 14), Some(Region::SuggestionRow(0)));
    assert_eq!(region_at(&regions(), 30, 16), Some(Region::SuggestionRow(2)));
}

#[test]
fn test_click_on_panel_border() {
    assert_eq!(region_at(&regions(), 30, 13), Some(Region::SuggestionPanel));
    assert_eq!(region_at(&regions(), 20, 15), Some(Region::SuggestionPanel));
    assert_eq!(region_at(&regions(), 30, 17), Some(Region::SuggestionPanel));
}

#[test]
fn test_click_outside() {
    assert_eq!(region_at(&regions(), 5, 5), None);
    assert_eq!(region_at(&regions(), 80, 11), None);
    assert_eq!(region_at(&regions(), 30, 18), None);
}

#[test]
fn test_hidden_panel_is_not_hit() {
    let regions = LayoutRegions {
        input_field: Some(Rect::new(20, 10, 60, 3)),
        suggestion_panel: None,
    };
    assert_eq!(region_at(&regions, 30, 14), None);
}

#[test]
fn test_empty_regions() {
    let mut regions = regions();
    regions.clear();
    assert_eq!(region_at(&regions, 30, 11), None);
    assert_eq!(regions, LayoutRegions::new());
}
