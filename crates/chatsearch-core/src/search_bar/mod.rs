//! The sidebar search bar.
//!
//! A thin control over a [`SuggestionBox`]: it interprets a handful of keys,
//! keeps the input's focus in line with the parent's intent, and forwards
//! everything else to the parent through [`SearchBarHandlers`].
//!
//! ## Lifecycle
//! - [`SearchBar::render`] is called once per update with a fresh
//!   [`SearchBarProps`]. The first call mounts the input.
//! - [`SearchBar::run_deferred`] is called once the render has settled and
//!   applies queued focus changes.
//! - [`SearchBar::handle_key`] is called for key-down events while the input
//!   has focus.

mod focus;
mod handlers;
mod keys;
mod props;
#[cfg(test)]
pub(crate) mod testing;

pub use focus::{FocusHandle, FocusRequest};
pub use handlers::SearchBarHandlers;
pub use keys::{KeyOutcome, SearchKey};
pub use props::{SearchBarIds, SearchBarProps};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::i18n::Messages;
use crate::suggestion::{SuggestionBox, SuggestionBoxOptions};
use focus::FocusQueue;

/// Message id of the placeholder and accessible label.
pub const SEARCH_MESSAGE_ID: &str = "search_bar.search";

const FORM_CLASS: &str = "search__form";
const FORM_FOCUSED_CLASS: &str = "search__form--focused";

pub struct SearchBar {
    /// The underlying input, present once mounted
    input: Option<SuggestionBox>,
    queue: FocusQueue,
    /// Props of the most recent render
    props: Option<SearchBarProps>,
    /// `(search_terms, is_focussed)` seen by the last focus sync
    synced: Option<(String, bool)>,
    messages: Messages,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new(Messages::default())
    }
}

impl SearchBar {
    pub fn new(messages: Messages) -> Self {
        Self {
            input: None,
            queue: FocusQueue::new(),
            props: None,
            synced: None,
            messages,
        }
    }

    /// Render with new props, mounting the input on first use.
    pub fn render(&mut self, props: SearchBarProps, handlers: &mut dyn SearchBarHandlers) {
        if self.input.is_none() {
            self.mount(&props, handlers);
        } else if let Some(input) = self.input.as_mut() {
            input.set_value(&props.search_terms, &props.suggestion_providers);
        }

        self.sync_focus(&props);
        self.props = Some(props);
    }

    fn mount(&mut self, props: &SearchBarProps, handlers: &mut dyn SearchBarHandlers) {
        let mut input = SuggestionBox::new(SuggestionBoxOptions {
            clearable: true,
            render_dividers: true,
        });
        input.set_value(&props.search_terms, &props.suggestion_providers);

        if props.is_focus && props.search_terms.is_empty() {
            log::debug!("{}: autofocus on mount", props.ids().search_box);
            input.focus(handlers);
        }

        self.input = Some(input);
        handlers.get_focus(self.queue.handle());
    }

    /// Queue a focus or blur whenever the terms or the focus flag changed.
    fn sync_focus(&mut self, props: &SearchBarProps) {
        let changed = self
            .synced
            .as_ref()
            .is_none_or(|(terms, focussed)| {
                *terms != props.search_terms || *focussed != props.is_focussed
            });
        if !changed {
            return;
        }

        let request = FocusRequest::from_intent(props.is_focussed, props.keep_focussed);
        log::debug!("scheduling {:?}", request);
        self.queue.schedule(request);
        self.synced = Some((props.search_terms.clone(), props.is_focussed));
    }

    /// Apply queued focus requests in order. Returns how many reached the
    /// input; requests made before mount are dropped.
    pub fn run_deferred(&mut self, handlers: &mut dyn SearchBarHandlers) -> usize {
        let mut applied = 0;
        while let Some(request) = self.queue.next() {
            let Some(input) = self.input.as_mut() else {
                log::trace!("dropping {:?}: input not mounted", request);
                continue;
            };
            match request {
                FocusRequest::Focus => input.focus(handlers),
                FocusRequest::Blur => input.blur(handlers),
            }
            applied += 1;
        }
        applied
    }

    /// Key-down handling. Escape, arrows and Enter are interpreted here;
    /// anything else falls through to the input's text handling.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        handlers: &mut dyn SearchBarHandlers,
    ) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::default();
        }

        match SearchKey::classify(&key) {
            SearchKey::Escape => {
                if let Some(input) = self.input.as_mut() {
                    input.blur(handlers);
                }
                KeyOutcome::STOPPED
            }
            SearchKey::Down => {
                handlers.update_highlighted_search_hint(1, true);
                KeyOutcome::PREVENTED
            }
            SearchKey::Up => {
                handlers.update_highlighted_search_hint(-1, true);
                KeyOutcome::PREVENTED
            }
            SearchKey::Enter => {
                handlers.handle_enter_key();
                KeyOutcome::PREVENTED
            }
            SearchKey::Other => {
                if let Some(input) = self.input.as_mut() {
                    input.handle_input(key, handlers);
                }
                KeyOutcome::default()
            }
        }
    }

    /// Submit the search form.
    pub fn submit(&mut self, handlers: &mut dyn SearchBarHandlers) {
        handlers.handle_submit();
    }

    /// Ask the parent to clear the search. The bar holds no text to reset.
    pub fn clear(&mut self, handlers: &mut dyn SearchBarHandlers) {
        handlers.handle_clear();
    }

    /// A new handle onto this bar's focus queue.
    pub fn focus_handle(&self) -> FocusHandle {
        self.queue.handle()
    }

    pub fn input(&self) -> Option<&SuggestionBox> {
        self.input.as_ref()
    }

    pub fn props(&self) -> Option<&SearchBarProps> {
        self.props.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.input.is_some()
    }

    pub fn is_input_focused(&self) -> bool {
        self.input.as_ref().is_some_and(SuggestionBox::is_focused)
    }

    /// Whether the form is styled as focused. Follows the parent's focus
    /// flag, not the input's actual focus.
    pub fn is_form_focused(&self) -> bool {
        self.props.as_ref().is_some_and(|p| p.is_focussed)
    }

    /// Style class of the form.
    pub fn form_class(&self) -> String {
        if self.is_form_focused() {
            format!("{} {}", FORM_CLASS, FORM_FOCUSED_CLASS)
        } else {
            FORM_CLASS.to_string()
        }
    }

    pub fn show_spinner(&self) -> bool {
        self.props.as_ref().is_some_and(|p| p.is_searching_term)
    }

    pub fn ids(&self) -> SearchBarIds {
        SearchBarIds::new(self.props.as_ref().is_some_and(|p| p.is_side_bar_right))
    }

    /// Localized placeholder, also used as the accessible label.
    pub fn placeholder(&self) -> &str {
        self.messages.localize(SEARCH_MESSAGE_ID, "Search")
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingHandlers};
    use super::*;
    use crate::suggestion::default_providers;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::HashMap;

    fn props(search_terms: &str) -> SearchBarProps {
        SearchBarProps {
            search_terms: search_terms.to_string(),
            is_focussed: false,
            keep_focussed: false,
            is_focus: false,
            is_searching_term: false,
            is_side_bar_right: false,
            suggestion_providers: default_providers(vec!["alice".to_string()], vec![]),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// A mounted bar whose input already has focus, with the mount-time
    /// calls discarded.
    fn focused_bar() -> (SearchBar, RecordingHandlers) {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        let mut p = props("");
        p.is_focussed = true;
        bar.render(p, &mut handlers);
        bar.run_deferred(&mut handlers);
        assert!(bar.is_input_focused());
        handlers.calls.clear();
        (bar, handlers)
    }

    // === Focus synchronization ===

    #[test]
    fn test_focus_sync_matches_intent_for_all_flag_combinations() {
        for (is_focussed, keep_focussed) in
            [(false, false), (false, true), (true, false), (true, true)]
        {
            let mut bar = SearchBar::default();
            let mut handlers = RecordingHandlers::default();
            let mut p = props("");
            p.is_focussed = is_focussed;
            p.keep_focussed = keep_focussed;

            bar.render(p, &mut handlers);
            // Nothing happens synchronously.
            assert!(!bar.is_input_focused());

            assert_eq!(bar.run_deferred(&mut handlers), 1);
            assert_eq!(
                bar.is_input_focused(),
                is_focussed || keep_focussed,
                "is_focussed={} keep_focussed={}",
                is_focussed,
                keep_focussed
            );
        }
    }

    #[test]
    fn test_blur_scheduled_when_intent_drops() {
        let (mut bar, mut handlers) = focused_bar();

        bar.render(props(""), &mut handlers);
        assert!(bar.is_input_focused());
        assert_eq!(bar.run_deferred(&mut handlers), 1);
        assert!(!bar.is_input_focused());
        assert_eq!(handlers.calls, vec![Call::Blur]);
    }

    #[test]
    fn test_focus_sync_only_on_dependency_change() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();

        bar.render(props(""), &mut handlers);
        assert_eq!(bar.run_deferred(&mut handlers), 1);

        // Same terms and focus flag: no new request.
        bar.render(props(""), &mut handlers);
        assert_eq!(bar.run_deferred(&mut handlers), 0);

        // keep_focussed alone is not a dependency.
        let mut p = props("");
        p.keep_focussed = true;
        bar.render(p.clone(), &mut handlers);
        assert_eq!(bar.run_deferred(&mut handlers), 0);
        assert!(!bar.is_input_focused());

        // A term change re-evaluates with keep_focussed in effect.
        p.search_terms = "d".to_string();
        bar.render(p, &mut handlers);
        assert_eq!(bar.run_deferred(&mut handlers), 1);
        assert!(bar.is_input_focused());
    }

    #[test]
    fn test_focus_handle_requests_are_deferred() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        bar.render(props(""), &mut handlers);
        bar.run_deferred(&mut handlers);
        handlers.calls.clear();

        let handle = bar.focus_handle();
        handle.focus();
        assert!(!bar.is_input_focused());

        assert_eq!(bar.run_deferred(&mut handlers), 1);
        assert!(bar.is_input_focused());
        assert_eq!(handlers.calls, vec![Call::Focus]);
    }

    #[test]
    fn test_requests_before_mount_are_skipped() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();

        bar.focus_handle().focus();
        assert_eq!(bar.run_deferred(&mut handlers), 0);
        assert!(handlers.calls.is_empty());
        assert!(!bar.is_mounted());
    }

    #[test]
    fn test_focus_handle_exposed_on_mount() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();

        bar.render(props(""), &mut handlers);
        bar.render(props("a"), &mut handlers);

        let exposed = handlers
            .calls
            .iter()
            .filter(|call| **call == Call::GetFocus)
            .count();
        assert_eq!(exposed, 1);

        handlers
            .focus_handle
            .as_ref()
            .expect("handle exposed")
            .focus();
        bar.run_deferred(&mut handlers);
        assert!(bar.is_input_focused());
    }

    // === Autofocus ===

    #[test]
    fn test_autofocus_when_empty() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        let mut p = props("");
        p.is_focus = true;

        bar.render(p, &mut handlers);
        assert!(bar.is_input_focused());
        assert_eq!(handlers.calls[0], Call::Focus);
    }

    #[test]
    fn test_no_autofocus_with_existing_terms() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        let mut p = props("abc");
        p.is_focus = true;

        bar.render(p, &mut handlers);
        assert!(!bar.is_input_focused());
        assert!(!handlers.calls.contains(&Call::Focus));
    }

    #[test]
    fn test_no_autofocus_without_focus_intent() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();

        bar.render(props(""), &mut handlers);
        assert!(!bar.is_input_focused());
    }

    // === Keyboard dispatch ===

    #[test]
    fn test_escape_blurs_and_stops_propagation() {
        let (mut bar, mut handlers) = focused_bar();

        let outcome = bar.handle_key(key(KeyCode::Esc), &mut handlers);
        assert!(outcome.prevent_default);
        assert!(outcome.stop_propagation);
        assert!(!bar.is_input_focused());
        assert_eq!(handlers.calls, vec![Call::Blur]);
    }

    #[test]
    fn test_escape_without_focus_still_stops_propagation() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        bar.render(props("abc"), &mut handlers);
        bar.run_deferred(&mut handlers);
        handlers.calls.clear();

        let outcome = bar.handle_key(key(KeyCode::Esc), &mut handlers);
        assert_eq!(outcome, KeyOutcome::STOPPED);
        assert!(handlers.calls.is_empty());
    }

    #[test]
    fn test_arrows_move_highlight_via_key_press() {
        let (mut bar, mut handlers) = focused_bar();

        let down = bar.handle_key(key(KeyCode::Down), &mut handlers);
        let up = bar.handle_key(key(KeyCode::Up), &mut handlers);

        assert_eq!(down, KeyOutcome::PREVENTED);
        assert_eq!(up, KeyOutcome::PREVENTED);
        assert_eq!(
            handlers.calls,
            vec![Call::Highlight(1, true), Call::Highlight(-1, true)]
        );
    }

    #[test]
    fn test_enter_only_calls_enter_handler() {
        let (mut bar, mut handlers) = focused_bar();

        let outcome = bar.handle_key(key(KeyCode::Enter), &mut handlers);
        assert_eq!(outcome, KeyOutcome::PREVENTED);
        assert_eq!(handlers.calls, vec![Call::EnterKey]);
    }

    #[test]
    fn test_other_keys_fall_through_to_input() {
        let (mut bar, mut handlers) = focused_bar();

        let outcome = bar.handle_key(key(KeyCode::Char('x')), &mut handlers);
        assert_eq!(outcome, KeyOutcome::default());
        assert_eq!(handlers.calls, vec![Call::Change("x".to_string())]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (mut bar, mut handlers) = focused_bar();

        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(bar.handle_key(release, &mut handlers), KeyOutcome::default());
        assert!(handlers.calls.is_empty());
    }

    // === Visual state and delegation ===

    #[test]
    fn test_spinner_tracks_searching_flag() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        assert!(!bar.show_spinner());

        let mut p = props("deploy");
        p.is_searching_term = true;
        bar.render(p.clone(), &mut handlers);
        assert!(bar.show_spinner());

        p.is_searching_term = false;
        bar.render(p, &mut handlers);
        assert!(!bar.show_spinner());
    }

    #[test]
    fn test_form_class_reflects_focus_flag() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();

        bar.render(props(""), &mut handlers);
        assert_eq!(bar.form_class(), "search__form");

        let mut p = props("");
        p.is_focussed = true;
        bar.render(p, &mut handlers);
        assert_eq!(bar.form_class(), "search__form search__form--focused");
    }

    #[test]
    fn test_ids_for_right_sidebar() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        assert_eq!(bar.ids().search_box, "searchBox");

        let mut p = props("");
        p.is_side_bar_right = true;
        bar.render(p, &mut handlers);
        let ids = bar.ids();
        assert_eq!(ids.container, "sbrSearchFormContainer");
        assert_eq!(ids.search_box, "sbrSearchBox");
        assert_eq!(ids.help_popup, "sbr-searchbar-help-popup");
    }

    #[test]
    fn test_clear_and_submit_delegate() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        bar.render(props("deploy"), &mut handlers);
        handlers.calls.clear();

        bar.clear(&mut handlers);
        bar.submit(&mut handlers);
        assert_eq!(handlers.calls, vec![Call::Clear, Call::Submit]);
    }

    #[test]
    fn test_clear_delegates_with_empty_terms_and_before_mount() {
        let mut bar = SearchBar::default();
        let mut handlers = RecordingHandlers::default();
        bar.clear(&mut handlers);
        assert_eq!(handlers.calls, vec![Call::Clear]);

        bar.render(props(""), &mut handlers);
        handlers.calls.clear();
        bar.clear(&mut handlers);
        assert_eq!(handlers.calls, vec![Call::Clear]);
    }

    #[test]
    fn test_placeholder_is_localized() {
        let mut overrides = HashMap::new();
        overrides.insert(SEARCH_MESSAGE_ID.to_string(), "Suchen".to_string());

        assert_eq!(SearchBar::default().placeholder(), "Search");
        assert_eq!(SearchBar::new(Messages::new(overrides)).placeholder(), "Suchen");
    }
}
