//! Animated loading indicator.

use ratatui::text::{Line, Span};

use super::styles::TEXT_WARNING;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner advanced once per tick.
#[derive(Debug, Default, Clone)]
pub struct LoadingSpinner {
    frame: usize,
}

impl LoadingSpinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn symbol(&self) -> &'static str {
        FRAMES[self.frame]
    }

    /// Spinner followed by an optional label.
    pub fn line(&self, text: &str) -> Line<'static> {
        let mut spans = vec![Span::styled(self.symbol(), TEXT_WARNING)];
        if !text.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(text.to_string(), TEXT_WARNING));
        }
        Line::from(spans)
    }
}
