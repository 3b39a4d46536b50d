//! Layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;

/// Rectangle centred in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Terminal columns occupied by `s`, counting wide characters as two.
pub fn display_width(s: &str) -> u16 {
    Line::from(s).width().min(u16::MAX as usize) as u16
}

/// Horizontal scroll that keeps a cursor at `cursor_col` inside a field
/// `width` columns wide.
pub fn scroll_for_cursor(cursor_col: u16, width: u16) -> u16 {
    cursor_col.saturating_sub(width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 40, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 15);
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        assert_eq!(scroll_for_cursor(5, 10), 0);
        assert_eq!(scroll_for_cursor(9, 10), 0);
        assert_eq!(scroll_for_cursor(10, 10), 1);
        assert_eq!(scroll_for_cursor(40, 19), 22);
    }
}
