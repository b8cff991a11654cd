//! UI Components for chatsearch-tui.
//!
//! Stateful panes implement [`Component`]. Overlays and the search bar view
//! are stateless renderers fed from the app state each frame.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

mod channel_view;
mod help_overlay;
mod loading_spinner;
mod results;
mod search_bar;
mod status_bar;
pub mod styles;
mod suggestion_date;
mod suggestion_list;

pub use channel_view::ChannelView;
pub use help_overlay::HelpOverlay;
pub use loading_spinner::LoadingSpinner;
pub use results::ResultsPanel;
pub use search_bar::SearchBarView;
pub use status_bar::StatusBar;
pub use suggestion_list::SuggestionList;

/// Region of the clear glyph inside the search box.
pub const CLEAR_REGION: &str = "searchClearButton";

/// Region of the results list.
pub const RESULTS_REGION: &str = "searchResults";

/// Common trait for all UI components.
pub trait Component {
    /// Draw the component within the given area.
    /// Takes `&mut self` to support stateful widgets like ListState.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}

/// Screen areas registered during the last draw, for mouse hit-testing.
///
/// Regions are keyed by element id. Later registrations sit on top of
/// earlier ones.
#[derive(Debug, Default, Clone)]
pub struct HitRegions {
    regions: Vec<(&'static str, Rect)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, id: &'static str, area: Rect) {
        self.regions.push((id, area));
    }

    /// The topmost region containing the cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<&'static str> {
        self.regions
            .iter()
            .rev()
            .find(|(_, area)| area.contains(Position::new(column, row)))
            .map(|(id, _)| *id)
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| *region == id)
            .map(|(_, area)| *area)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// One buffer row as plain text.
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    /// The whole buffer as newline-separated rows.
    pub fn buffer_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| row_text(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
