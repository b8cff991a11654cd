//! Date picker for the `on:`, `before:` and `after:` modifiers.
//!
//! Lays the offered dates out as a week grid, seven per row, in the order
//! the provider returned them so highlight indices line up.

use chatsearch_core::suggestion::SuggestionResults;
use chatsearch_core::utils::text::pad_to_width;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::styles::{TEXT_DIM, row_highlight_style};

const COLUMNS: usize = 7;

/// `Www DD` plus the separating space.
const CELL_WIDTH: usize = 7;

/// Grid rows needed for `count` dates.
pub(super) fn rows(count: usize) -> usize {
    count.div_ceil(COLUMNS)
}

/// Item index of the cell at `x`, `y` inside the grid's borders.
pub(super) fn index_at(x: usize, y: usize) -> Option<usize> {
    let column = x / CELL_WIDTH;
    (column < COLUMNS).then_some(y * COLUMNS + column)
}

/// Cell text: weekday and day of month, e.g. `Fri 16`.
fn cell_label(label: &str, weekday: &str) -> String {
    let day = label.rsplit('-').next().unwrap_or(label);
    format!("{} {}", weekday, day)
}

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    results: &SuggestionResults,
    highlighted: Option<usize>,
) {
    let lines: Vec<Line> = results
        .items
        .chunks(COLUMNS)
        .enumerate()
        .map(|(row, week)| {
            let spans: Vec<Span> = week
                .iter()
                .enumerate()
                .flat_map(|(col, item)| {
                    let index = row * COLUMNS + col;
                    let label = cell_label(&item.label, &item.description);
                    let text = pad_to_width(&label, CELL_WIDTH - 1);
                    let cell = if highlighted == Some(index) {
                        Span::styled(text, row_highlight_style())
                    } else {
                        Span::raw(text)
                    };
                    [cell, Span::styled(" ", TEXT_DIM)]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
