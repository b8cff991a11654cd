//! Search results panel.
//!
//! Shows the last search newest first, with the query's words and phrases
//! highlighted in each message.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::Component;
use super::styles::{
    CHANNEL, HIGHLIGHT_SYMBOL, TEXT_DIM, TEXT_ERROR, TEXT_WARNING, border_style, match_style,
    row_highlight_style, user_style,
};
use crate::store::{LoadState, Message};

/// Split `text` into plain and highlighted spans. Matching is ASCII
/// case-insensitive; overlapping terms prefer the earliest, then longest.
pub fn highlight_spans(text: &str, terms: &[String]) -> Vec<Span<'static>> {
    let lower = text.to_ascii_lowercase();
    let needles: Vec<String> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| term.to_ascii_lowercase())
        .collect();

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let next = needles
            .iter()
            .filter_map(|needle| {
                lower[pos..]
                    .find(needle.as_str())
                    .map(|offset| (pos + offset, needle.len()))
            })
            .min_by_key(|(start, len)| (*start, std::cmp::Reverse(*len)));

        let Some((start, len)) = next else {
            break;
        };
        if start > pos {
            spans.push(Span::raw(text[pos..start].to_string()));
        }
        spans.push(Span::styled(text[start..start + len].to_string(), match_style()));
        pos = start + len;
    }
    if pos < text.len() {
        spans.push(Span::raw(text[pos..].to_string()));
    }
    spans
}

#[derive(Default)]
pub struct ResultsPanel {
    state: LoadState<Vec<Message>>,
    terms: Vec<String>,
    list_state: ListState,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.state = LoadState::Loading;
        self.list_state.select(None);
    }

    pub fn set_results(&mut self, messages: Vec<Message>, terms: Vec<String>) {
        self.list_state
            .select(if messages.is_empty() { None } else { Some(0) });
        self.state = LoadState::Loaded(messages);
        self.terms = terms;
    }

    pub fn set_error(&mut self, error: String) {
        self.state = LoadState::Error(error);
        self.list_state.select(None);
    }

    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.terms.clear();
        self.list_state.select(None);
    }

    pub fn state(&self) -> &LoadState<Vec<Message>> {
        &self.state
    }

    pub fn selected(&self) -> Option<&Message> {
        let index = self.list_state.selected()?;
        self.state.data()?.get(index)
    }

    fn len(&self) -> usize {
        self.state.data().map_or(0, Vec::len)
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.len() == 0 {
            return;
        }
        let previous = self
            .list_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    fn render_message(&self, message: &Message) -> ListItem<'static> {
        let header = Line::from(vec![
            Span::styled(format!("~{}", message.channel), CHANNEL),
            Span::raw("  "),
            Span::styled(format!("@{}", message.user), user_style()),
            Span::raw("  "),
            Span::styled(
                message
                    .timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                TEXT_DIM,
            ),
        ]);
        let mut body = vec![Span::raw("  ")];
        body.extend(highlight_spans(&message.text, &self.terms));

        ListItem::new(vec![header, Line::from(body), Line::from("")])
    }

    fn render_placeholder(frame: &mut Frame, area: Rect, block: Block<'_>, line: Line<'_>) {
        let paragraph = Paragraph::new(vec![Line::from(""), line]).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Component for ResultsPanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = match &self.state {
            LoadState::Loaded(messages) => format!(" Search Results ({}) ", messages.len()),
            _ => " Search Results ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        let messages = match &self.state {
            LoadState::Idle => {
                let hint = Line::from(Span::styled("  Press / to search messages", TEXT_DIM));
                Self::render_placeholder(frame, area, block, hint);
                return;
            }
            LoadState::Loading => {
                let hint = Line::from(Span::styled("  ⏳ Searching...", TEXT_WARNING));
                Self::render_placeholder(frame, area, block, hint);
                return;
            }
            LoadState::Error(error) => {
                let hint = Line::from(Span::styled(format!("  ❌ Error: {}", error), TEXT_ERROR));
                Self::render_placeholder(frame, area, block, hint);
                return;
            }
            LoadState::Loaded(messages) if messages.is_empty() => {
                let hint = Line::from(Span::styled("  No messages match", TEXT_DIM));
                Self::render_placeholder(frame, area, block, hint);
                return;
            }
            LoadState::Loaded(messages) => messages,
        };

        let items: Vec<ListItem> = messages.iter().map(|m| self.render_message(m)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(if focused {
                row_highlight_style()
            } else {
                ratatui::style::Style::default()
            })
            .highlight_symbol(HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if self.len() > 0 {
                    self.list_state.select(Some(0));
                }
                true
            }
            KeyCode::End | KeyCode::Char('G') => {
                if let Some(last) = self.len().checked_sub(1) {
                    self.list_state.select(Some(last));
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use crate::store::{MessageStore, SearchQuery};
    use chrono::{TimeZone, Utc};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn texts(spans: &[Span<'_>]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    fn loaded_panel(terms: &str) -> ResultsPanel {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let store = MessageStore::sample_at(now);
        let query = SearchQuery::parse(terms);
        let mut panel = ResultsPanel::new();
        panel.set_results(
            store.search(&query),
            query.highlight_terms().into_iter().map(String::from).collect(),
        );
        panel
    }

    #[test]
    fn test_highlight_spans_case_insensitive() {
        let spans = highlight_spans("Deploy to staging, then deploy", &["deploy".to_string()]);
        assert_eq!(texts(&spans), vec!["Deploy", " to staging, then ", "deploy"]);
        assert_eq!(spans[0].style, match_style());
        assert_eq!(spans[1].style, ratatui::style::Style::default());
    }

    #[test]
    fn test_highlight_prefers_longest_overlap() {
        let terms = vec!["search".to_string(), "search bar".to_string()];
        let spans = highlight_spans("the search bar works", &terms);
        assert_eq!(texts(&spans), vec!["the ", "search bar", " works"]);
    }

    #[test]
    fn test_highlight_without_terms() {
        let spans = highlight_spans("plain", &[]);
        assert_eq!(texts(&spans), vec!["plain"]);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut panel = loaded_panel("deploy");
        assert_eq!(panel.selected().map(|m| m.id), Some(1));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..5 {
            assert!(panel.handle_key(down));
        }
        assert_eq!(panel.selected().map(|m| m.id), Some(9));

        assert!(panel.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE)));
        assert_eq!(panel.selected().map(|m| m.id), Some(1));
        assert!(!panel.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_draw_states() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");

        let mut panel = ResultsPanel::new();
        terminal
            .draw(|frame| panel.draw(frame, frame.area(), false))
            .expect("draw");
        assert!(buffer_text(terminal.backend().buffer()).contains("Press / to search"));

        panel.set_loading();
        terminal
            .draw(|frame| panel.draw(frame, frame.area(), false))
            .expect("draw");
        assert!(buffer_text(terminal.backend().buffer()).contains("Searching..."));

        let mut panel = loaded_panel("from:carol in:dev");
        terminal
            .draw(|frame| panel.draw(frame, frame.area(), true))
            .expect("draw");
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Search Results (2)"));
        assert!(text.contains("~dev"));
        assert!(text.contains("@carol"));
    }

    #[test]
    fn test_reset_clears_results() {
        let mut panel = loaded_panel("deploy");
        panel.reset();
        assert_eq!(panel.state(), &LoadState::Idle);
        assert!(panel.selected().is_none());
    }
}
