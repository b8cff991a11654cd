//! Status bar component.
//!
//! Displays keybindings and status messages at the bottom of the screen.
//! Bindings switch with the search input's focus.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

const BROWSE_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("/", "Search"),
    KeyBinding::new("↑↓", "Results"),
    KeyBinding::new("r", "Rerun"),
    KeyBinding::new("?", "Help"),
    KeyBinding::new("q", "Quit"),
];

const SEARCH_BINDINGS: &[KeyBinding] = &[
    KeyBinding::new("↑↓", "Suggestion"),
    KeyBinding::new("Enter", "Select/Search"),
    KeyBinding::new("^U", "Clear"),
    KeyBinding::new("Esc", "Leave search"),
];

/// Status bar showing keybindings and messages.
pub struct StatusBar {
    message: String,
    /// Search input has focus
    searching: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            searching: false,
        }
    }

    /// Set a status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Show the bindings for typing in the search input.
    pub fn set_searching(&mut self, searching: bool) {
        self.searching = searching;
    }

    fn bindings(&self) -> &'static [KeyBinding] {
        if self.searching {
            SEARCH_BINDINGS
        } else {
            BROWSE_BINDINGS
        }
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::Green),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        // Status bar doesn't handle keys
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::row_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_bindings_follow_search_focus() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.bindings()[0].action, "Search");
        bar.set_searching(true);
        assert_eq!(bar.bindings()[0].action, "Suggestion");
    }

    #[test]
    fn test_draw_message() {
        let mut bar = StatusBar::new();
        bar.set_message("3 results");
        let mut terminal = Terminal::new(TestBackend::new(100, 3)).expect("terminal");
        terminal
            .draw(|frame| bar.draw(frame, frame.area(), false))
            .expect("draw");

        let row = row_text(terminal.backend().buffer(), 1);
        assert!(row.contains("Search"));
        assert!(row.contains("3 results"));
    }
}
