//! Channel pane showing the conversation around the selected result.

use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use super::styles::{TEXT_DIM, border_style, row_highlight_style, user_style};
use crate::store::{Message, MessageStore};

#[derive(Debug, Default)]
pub struct ChannelView {
    channel: Option<String>,
    messages: Vec<Message>,
    focused_id: Option<u64>,
}

impl ChannelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the channel of `message`, with `message` marked.
    pub fn show(&mut self, store: &MessageStore, message: &Message) {
        if self.channel.as_deref() != Some(message.channel.as_str()) {
            self.messages = store
                .channel_messages(&message.channel)
                .into_iter()
                .cloned()
                .collect();
            self.channel = Some(message.channel.clone());
        }
        self.focused_id = Some(message.id);
    }

    pub fn clear(&mut self) {
        self.channel = None;
        self.messages.clear();
        self.focused_id = None;
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    fn message_line(&self, message: &Message) -> Line<'static> {
        let time = message.timestamp.with_timezone(&Local).format("%m-%d %H:%M");
        let line = Line::from(vec![
            Span::styled(format!("{} ", time), TEXT_DIM),
            Span::styled(format!("@{}", message.user), user_style()),
            Span::raw(": "),
            Span::raw(message.text.clone()),
        ]);
        if self.focused_id == Some(message.id) {
            line.style(row_highlight_style())
        } else {
            line
        }
    }
}

impl Component for ChannelView {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = match self.channel() {
            Some(channel) => format!(" ~{} ", channel),
            None => " Channel ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        let lines: Vec<Line> = if self.channel().is_none() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Select a search result to open its channel",
                    TEXT_DIM,
                )),
            ]
        } else {
            self.messages.iter().map(|m| self.message_line(m)).collect()
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use chrono::{TimeZone, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn store() -> MessageStore {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        MessageStore::sample_at(now)
    }

    #[test]
    fn test_show_loads_channel_in_order() {
        let store = store();
        let mut view = ChannelView::new();
        let target = store
            .search(&crate::store::SearchQuery::parse("from:alice in:dev"))
            .remove(0);

        view.show(&store, &target);

        assert_eq!(view.channel(), Some("dev"));
        assert_eq!(view.messages.len(), 5);
        assert!(
            view.messages
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
        );
        assert_eq!(view.focused_id, Some(target.id));
    }

    #[test]
    fn test_draw_placeholder_and_channel() {
        let store = store();
        let mut view = ChannelView::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).expect("terminal");

        terminal
            .draw(|frame| view.draw(frame, frame.area(), false))
            .expect("draw");
        assert!(buffer_text(terminal.backend().buffer()).contains("Select a search result"));

        let target = store
            .search(&crate::store::SearchQuery::parse("lunch"))
            .remove(0);
        view.show(&store, &target);
        terminal
            .draw(|frame| view.draw(frame, frame.area(), false))
            .expect("draw");
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("~off-topic"));
        assert!(text.contains("Anyone up for lunch?"));

        view.clear();
        assert_eq!(view.channel(), None);
    }
}
