//! TUI utility functions - layout and styling helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::site::Site;

pub const ACCENT: Color = Color::Magenta;

/// Status dot for a site: green when up, red when down
pub fn status_span(site: &Site) -> Span<'static> {
    let color = if site.is_up { Color::Green } else { Color::Red };
    Span::styled(" ● ", Style::default().fg(color))
}

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

/// Width of each bar so `count` bars fit in `width` columns
pub fn bar_width(width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    (width.saturating_sub(2) / count).saturating_sub(1).clamp(3, 16)
}

/// Whether terminal cell (`col`, `row`) lies inside `area`
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}
