//! Layout constants for chatsearch-tui.
//!
//! Centralizes all layout-related magic numbers for easy tuning and consistency.

use ratatui::layout::{Constraint, Layout, Rect};

/// Main layout constants.
pub mod main {
    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Preferred sidebar width in columns.
    pub const SIDEBAR_WIDTH: u16 = 56;

    /// Columns the channel pane keeps before the sidebar shrinks.
    pub const CONTENT_MIN_WIDTH: u16 = 30;
}

/// Suggestion popup constants.
pub mod popup {
    /// Tallest the suggestion popup may grow, borders included.
    pub const MAX_SUGGESTION_HEIGHT: u16 = 12;
}

/// Split the body into `(sidebar, content)`, placing the sidebar on the
/// requested side.
pub fn sidebar_split(area: Rect, side_bar_right: bool) -> (Rect, Rect) {
    let width = main::SIDEBAR_WIDTH.min(area.width.saturating_sub(main::CONTENT_MIN_WIDTH));
    let sidebar = Constraint::Length(width);
    let content = Constraint::Fill(1);

    if side_bar_right {
        let [content_area, sidebar_area] = Layout::horizontal([content, sidebar]).areas(area);
        (sidebar_area, content_area)
    } else {
        let [sidebar_area, content_area] = Layout::horizontal([sidebar, content]).areas(area);
        (sidebar_area, content_area)
    }
}
