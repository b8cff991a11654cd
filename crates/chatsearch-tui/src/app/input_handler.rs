//! Keyboard and mouse input handling for the application.
//!
//! While the search input has focus, key-downs go to the search bar first
//! and only reach the global bindings if the bar let them propagate.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::components::{CLEAR_REGION, Component, RESULTS_REGION, SuggestionList};

use super::App;

impl App {
    /// Handle keyboard input with delegated responsibility.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        // 1. Overlay handling (highest priority)
        if self.handle_overlay_keys(key.code) {
            return;
        }

        // 2. Search input
        if self.search_bar.is_input_focused() {
            let outcome = self.search_bar.handle_key(key, &mut self.search);
            if outcome.stop_propagation {
                return;
            }
            if !outcome.is_handled() {
                self.handle_chord_keys(key);
            }
            return;
        }

        // 3. Global keybindings
        if self.handle_global_keys(key) {
            return;
        }

        // 4. Delegate remaining keys to the results list
        if self.results.handle_key(key) {
            self.show_selected_channel();
        }
    }

    /// Handle keyboard input when the help overlay is shown.
    /// Returns true if the key was handled.
    pub(super) fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
            self.show_help = false;
        }
        true
    }

    /// Bindings that apply even while typing in the search input.
    fn handle_chord_keys(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
        }
    }

    /// Handle global keybindings (quit, help, focus, rerun).
    /// Returns true if the key was handled.
    pub(super) fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.request_focus();
                true
            }
            KeyCode::Char('/') => {
                self.search.request_focus();
                true
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                true
            }
            KeyCode::Char('r') => {
                self.search_bar.submit(&mut self.search);
                true
            }
            _ => false,
        }
    }

    /// Handle mouse input against the regions of the last draw.
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self.regions.hit(mouse.column, mouse.row);
        let ids = self.search_bar.ids();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(CLEAR_REGION) => {
                    self.search_bar.clear(&mut self.search);
                    self.search.request_focus();
                }
                Some(id) if id == ids.search_box || id == ids.container => {
                    self.search.request_focus();
                }
                Some(id) if id == ids.help_popup => {
                    self.click_suggestion(mouse.column, mouse.row);
                }
                _ => {
                    if self.search_bar.is_input_focused() {
                        self.search.request_blur();
                    }
                }
            },
            MouseEventKind::ScrollDown if target == Some(RESULTS_REGION) => {
                self.results.select_next();
                self.show_selected_channel();
            }
            MouseEventKind::ScrollUp if target == Some(RESULTS_REGION) => {
                self.results.select_previous();
                self.show_selected_channel();
            }
            _ => {}
        }
    }

    /// Complete the suggestion under the clicked popup cell.
    fn click_suggestion(&mut self, column: u16, row: u16) {
        let ids = self.search_bar.ids();
        let Some(popup) = self.regions.get(ids.help_popup) else {
            return;
        };
        let index = self.search.suggestions().and_then(|results| {
            SuggestionList::index_at(&results, popup, self.suggestion_offset, column, row)
        });
        if let Some(index) = index {
            self.search.select_suggestion(index);
        }
    }
}
