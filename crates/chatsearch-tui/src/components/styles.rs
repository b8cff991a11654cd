//! Shared style definitions for TUI components.
//!
//! Keeps the search bar, its popups and the result panes visually
//! consistent.

use ratatui::style::{Color, Modifier, Style};

// === Border Styles ===

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === List Styles ===

/// Style for section dividers in the suggestion list.
pub fn divider_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for a highlighted suggestion or result row.
pub fn row_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Default highlight symbol for list selection.
pub const HIGHLIGHT_SYMBOL: &str = "► ";

/// Search term occurrences inside a result.
pub fn match_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

// === Text Styles ===

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for warning/loading text.
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

/// Style for error text.
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);

/// Message authors.
pub fn user_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Channel names.
pub const CHANNEL: Style = Style::new().fg(Color::Magenta);

// === Input Styles ===

/// Style for cursor indicator.
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

/// Style for input text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_focused() {
        let style = border_style(true);
        assert_eq!(style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_border_style_unfocused() {
        let style = border_style(false);
        assert_eq!(style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_row_highlight_style() {
        let style = row_highlight_style();
        assert_eq!(style.bg, Some(Color::Cyan));
        assert_eq!(style.fg, Some(Color::Black));
    }
}
