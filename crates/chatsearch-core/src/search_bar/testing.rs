//! Recording handler double shared by unit tests.

use super::{FocusHandle, SearchBarHandlers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Change(String),
    EnterKey,
    Submit,
    Clear,
    Focus,
    Blur,
    Highlight(i32, bool),
    GetFocus,
}

#[derive(Default)]
pub(crate) struct RecordingHandlers {
    pub calls: Vec<Call>,
    pub focus_handle: Option<FocusHandle>,
}

impl SearchBarHandlers for RecordingHandlers {
    fn handle_change(&mut self, value: String) {
        self.calls.push(Call::Change(value));
    }

    fn handle_enter_key(&mut self) {
        self.calls.push(Call::EnterKey);
    }

    fn handle_submit(&mut self) {
        self.calls.push(Call::Submit);
    }

    fn handle_clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn handle_focus(&mut self) {
        self.calls.push(Call::Focus);
    }

    fn handle_blur(&mut self) {
        self.calls.push(Call::Blur);
    }

    fn update_highlighted_search_hint(&mut self, index_delta: i32, changed_via_key_press: bool) {
        self.calls
            .push(Call::Highlight(index_delta, changed_via_key_press));
    }

    fn get_focus(&mut self, focus: FocusHandle) {
        self.calls.push(Call::GetFocus);
        self.focus_handle = Some(focus);
    }
}
