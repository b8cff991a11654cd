//! Search bar view.
//!
//! Draws the form around the core `SearchBar`: magnifier, value or
//! placeholder, cursor, spinner and the clear glyph. Registers hit regions
//! under the bar's element ids.

use chatsearch_core::search_bar::SearchBar;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles::{TEXT_DIM, border_style, cursor_style, input_text_style};
use super::{CLEAR_REGION, HitRegions, LoadingSpinner};

const MAGNIFIER: &str = "⌕ ";
const CURSOR: &str = "▏";
const CLEAR_GLYPH: &str = "✕";

/// Keep the end of `text` that fits in `max_width` columns.
fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[idx + c.len_utf8()..];
        }
    }
    text
}

pub struct SearchBarView;

impl SearchBarView {
    /// Height including borders.
    pub const HEIGHT: u16 = 3;

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        bar: &SearchBar,
        spinner: &LoadingSpinner,
        regions: &mut HitRegions,
    ) {
        let ids = bar.ids();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(bar.is_form_focused()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [text_area, spinner_area, clear_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .areas(inner);

        let value = bar.input().map_or("", |input| input.value());
        let focused = bar.is_input_focused();

        let mut spans = vec![Span::styled(MAGNIFIER, TEXT_DIM)];
        let available = (text_area.width as usize).saturating_sub(MAGNIFIER.width() + CURSOR.width());
        if value.is_empty() {
            if focused {
                spans.push(Span::styled(CURSOR, cursor_style()));
            }
            spans.push(Span::styled(bar.placeholder().to_string(), TEXT_DIM));
        } else {
            spans.push(Span::styled(
                tail_to_width(value, available).to_string(),
                input_text_style(),
            ));
            if focused {
                spans.push(Span::styled(CURSOR, cursor_style()));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

        if bar.show_spinner() {
            frame.render_widget(Paragraph::new(spinner.line("")), spinner_area);
        }

        regions.register(ids.container, area);
        regions.register(ids.search_box, inner);

        if bar.input().is_some_and(|input| input.shows_clear()) {
            frame.render_widget(Paragraph::new(Span::styled(CLEAR_GLYPH, TEXT_DIM)), clear_area);
            regions.register(CLEAR_REGION, clear_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use chatsearch_core::prelude::*;
    use ratatui::{Terminal, backend::TestBackend};

    struct Parent(SearchBarProps);

    impl SearchBarHandlers for Parent {
        fn handle_change(&mut self, value: String) {
            self.0.search_terms = value;
        }
        fn handle_enter_key(&mut self) {}
        fn handle_submit(&mut self) {}
        fn handle_clear(&mut self) {}
        fn handle_focus(&mut self) {
            self.0.is_focussed = true;
        }
        fn handle_blur(&mut self) {
            self.0.is_focussed = false;
        }
        fn update_highlighted_search_hint(&mut self, _: i32, _: bool) {}
    }

    fn parent(terms: &str, is_searching_term: bool) -> Parent {
        Parent(SearchBarProps {
            search_terms: terms.to_string(),
            is_focussed: false,
            keep_focussed: false,
            is_focus: false,
            is_searching_term,
            is_side_bar_right: false,
            suggestion_providers: default_providers(Vec::new(), Vec::new()),
        })
    }

    fn draw(bar: &SearchBar) -> (String, HitRegions) {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).expect("terminal");
        let mut regions = HitRegions::default();
        let spinner = LoadingSpinner::default();
        terminal
            .draw(|frame| SearchBarView::render(frame, frame.area(), bar, &spinner, &mut regions))
            .expect("draw");
        (buffer_text(terminal.backend().buffer()), regions)
    }

    #[test]
    fn test_empty_bar_shows_placeholder_without_clear() {
        let mut parent = parent("", false);
        let mut bar = SearchBar::default();
        bar.render(parent.0.clone(), &mut parent);

        let (text, regions) = draw(&bar);
        assert!(text.contains("Search"));
        assert!(!text.contains(CLEAR_GLYPH));
        assert_eq!(regions.get(CLEAR_REGION), None);
        assert_eq!(regions.get("searchBox"), Some(Rect::new(1, 1, 28, 1)));
    }

    #[test]
    fn test_value_with_clear_and_spinner() {
        let mut parent = parent("from:alice", true);
        let mut bar = SearchBar::default();
        bar.render(parent.0.clone(), &mut parent);

        let (text, regions) = draw(&bar);
        assert!(text.contains("from:alice"));
        assert!(text.contains(CLEAR_GLYPH));
        assert!(text.contains(LoadingSpinner::default().symbol()));
        assert_eq!(regions.hit(27, 1), Some(CLEAR_REGION));
        assert_eq!(regions.hit(5, 1), Some("searchBox"));
        assert_eq!(regions.hit(0, 0), Some("searchFormContainer"));
    }

    #[test]
    fn test_focused_bar_shows_cursor() {
        let mut parent = parent("", false);
        parent.0.is_focus = true;
        let mut bar = SearchBar::default();
        // Mount autofocuses; the second render sees the parent's new flag.
        bar.render(parent.0.clone(), &mut parent);
        bar.render(parent.0.clone(), &mut parent);
        bar.run_deferred(&mut parent);

        let (text, _) = draw(&bar);
        assert!(bar.is_input_focused());
        assert!(text.contains(CURSOR));
    }

    #[test]
    fn test_tail_to_width_keeps_end() {
        assert_eq!(tail_to_width("deploy staging", 7), "staging");
        assert_eq!(tail_to_width("short", 10), "short");
        assert_eq!(tail_to_width("日本語", 4), "本語");
    }
}
