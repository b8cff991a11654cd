//! Help overlay component.
//!
//! Displays a modal overlay showing all available keybindings and the
//! search modifiers.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay showing keybindings.
pub struct HelpOverlay;

impl HelpOverlay {
    const GLOBAL_KEYS: &'static [(&'static str, &'static str)] = &[
        ("/ or Ctrl+F", "Focus the search box"),
        ("↑ / k", "Previous result"),
        ("↓ / j", "Next result"),
        ("r", "Run the search again"),
        ("q / Esc", "Quit application"),
        ("?", "Toggle help"),
    ];

    const SEARCH_KEYS: &'static [(&'static str, &'static str)] = &[
        ("↑ / ↓", "Move through suggestions"),
        ("Enter", "Use suggestion or search"),
        ("Ctrl+U", "Clear the search box"),
        ("Esc", "Leave the search box"),
    ];

    const MODIFIERS: &'static [(&'static str, &'static str)] = &[
        ("from:user", "Messages from a user"),
        ("in:channel", "Messages in a channel"),
        ("on:YYYY-MM-DD", "Messages on a date"),
        ("before: after:", "Date ranges"),
        ("-word", "Exclude a word"),
        ("\"a phrase\"", "Exact phrase"),
    ];

    /// Render the help overlay centered on screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        Self::push_section(&mut lines, "Global", Self::GLOBAL_KEYS);
        lines.push(Line::from(""));
        Self::push_section(&mut lines, "Search box", Self::SEARCH_KEYS);
        lines.push(Line::from(""));
        Self::push_section(&mut lines, "Search modifiers", Self::MODIFIERS);

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help_text = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help_text, popup_area);
    }

    fn push_section(lines: &mut Vec<Line<'static>>, heading: &'static str, keys: &[(&str, &str)]) {
        lines.push(Line::from(Span::styled(
            format!("  {}", heading),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("  ──────────────────────────────────"));
        for (key, action) in keys {
            lines.push(Self::format_keybinding(key, action));
        }
    }

    /// Format a single keybinding line.
    fn format_keybinding(key: &str, action: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{:<16}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action.to_string()),
        ])
    }

    /// Calculate a centered rect with percentage-based dimensions.
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_centered_rect() {
        let area = HelpOverlay::centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_render_lists_modifiers() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal
            .draw(|frame| HelpOverlay::render(frame, frame.area()))
            .expect("draw");

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Search modifiers"));
        assert!(text.contains("from:user"));
        assert!(text.contains("Leave the search box"));
    }
}
