//! Suggestion popup shown under the search bar while the input is focused.

use chatsearch_core::suggestion::{SuggestionKind, SuggestionResults};
use chatsearch_core::utils::text::{pad_to_width, truncate_to_width};
use ratatui::{
    Frame,
    layout::{Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use super::styles::{
    BORDER_FOCUSED, HIGHLIGHT_SYMBOL, TEXT_DIM, divider_style, row_highlight_style,
};
use super::suggestion_date;

pub struct SuggestionList;

impl SuggestionList {
    /// Rows needed to show `results` in full, borders included.
    pub fn height(results: &SuggestionResults) -> u16 {
        let rows = match results.kind {
            SuggestionKind::List => results.len(),
            SuggestionKind::Date => suggestion_date::rows(results.len()),
        };
        rows as u16 + 2
    }

    /// Draw the popup over `area`.
    ///
    /// Returns the index of the first visible item, which moves once the
    /// highlight scrolls a long list.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        results: &SuggestionResults,
        highlighted: Option<usize>,
        render_dividers: bool,
    ) -> usize {
        frame.render_widget(Clear, area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(BORDER_FOCUSED);
        if let Some(divider) = results.divider.as_deref().filter(|_| render_dividers) {
            block = block.title(Span::styled(format!(" {} ", divider), divider_style()));
        }

        if results.kind == SuggestionKind::Date {
            suggestion_date::render(frame, area, block, results, highlighted);
            return 0;
        }

        let label_width = results
            .items
            .iter()
            .map(|item| item.label.width())
            .max()
            .unwrap_or(0);
        // Borders, highlight symbol and the gap before the description
        let description_width = (area.width as usize)
            .saturating_sub(label_width + HIGHLIGHT_SYMBOL.width() + 4);

        let items: Vec<ListItem> = results
            .items
            .iter()
            .map(|item| {
                let mut spans = vec![Span::raw(pad_to_width(&item.label, label_width))];
                if !item.description.is_empty() && description_width > 0 {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        truncate_to_width(&item.description, description_width),
                        TEXT_DIM,
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(row_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        let mut state = ListState::default().with_selected(highlighted);
        frame.render_stateful_widget(list, area, &mut state);
        state.offset()
    }

    /// Item under the cell at (`column`, `row`) of a popup drawn over `area`
    /// whose first visible item was `offset`.
    pub fn index_at(
        results: &SuggestionResults,
        area: Rect,
        offset: usize,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        let inner = area.inner(Margin::new(1, 1));
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let (x, y) = ((column - inner.x) as usize, (row - inner.y) as usize);

        let index = match results.kind {
            SuggestionKind::List => offset + y,
            SuggestionKind::Date => suggestion_date::index_at(x, y)?,
        };
        (index < results.len()).then_some(index)
    }
}
