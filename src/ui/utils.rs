use std::time::Duration;

use ratatui::layout::Rect;

/// Format a countdown duration as "2m 05s" or "45s"
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;

    if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Rectangle horizontally centered at the given width percentage with a fixed
/// height, clamped to the containing area
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
