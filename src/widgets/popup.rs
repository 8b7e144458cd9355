use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of `width` x `height` centered horizontally in `area`, starting at row `y`
pub fn centered_at_row(area: Rect, width: u16, height: u16, y: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = y.clamp(area.y, area.bottom());
    let popup_height = height.min(area.bottom().saturating_sub(popup_y));

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect directly under `anchor`, as wide as it, clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.bottom();
    let available = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
