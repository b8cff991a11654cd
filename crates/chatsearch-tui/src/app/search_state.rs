//! Search state owned by the sidebar.
//!
//! The search bar is a controlled component: terms, focus intent and the
//! highlighted suggestion all live here, and the bar reports user intent
//! through the `SearchBarHandlers` callbacks.

use std::sync::Arc;

use chatsearch_core::search_bar::{FocusHandle, SearchBarHandlers, SearchBarProps};
use chatsearch_core::suggestion::{
    ProviderList, SuggestionResults, collect_suggestions, complete_term,
};
use tokio::sync::mpsc;

use crate::action::AppAction;
use crate::store::SearchQuery;

pub struct SearchState {
    /// Text in the search box
    pub terms: String,
    /// The input reported focus
    pub is_focussed: bool,
    /// Keep focus across the next update (set after completing a suggestion)
    pub keep_focussed: bool,
    /// Index into the current suggestions
    pub highlighted: Option<usize>,
    /// Whether the highlight last moved via the arrow keys
    pub highlight_via_key: bool,
    /// A submitted search has not reported back yet
    pub is_searching: bool,
    /// Query of the last submitted search
    pub active_query: Option<SearchQuery>,
    /// Current request ID for dropping stale results
    pub request_id: u64,
    /// Focus the bar when it mounts with empty terms
    is_focus: bool,
    side_bar_right: bool,
    providers: ProviderList,
    focus_handle: Option<FocusHandle>,
    action_tx: mpsc::UnboundedSender<AppAction>,
}

impl SearchState {
    pub fn new(
        providers: ProviderList,
        side_bar_right: bool,
        action_tx: mpsc::UnboundedSender<AppAction>,
    ) -> Self {
        Self {
            terms: String::new(),
            is_focussed: false,
            keep_focussed: false,
            highlighted: None,
            highlight_via_key: false,
            is_searching: false,
            active_query: None,
            request_id: 0,
            is_focus: true,
            side_bar_right,
            providers,
            focus_handle: None,
            action_tx,
        }
    }

    /// Start with `keep_focussed` already set.
    pub fn with_keep_focussed(mut self, keep_focussed: bool) -> Self {
        self.keep_focussed = keep_focussed;
        self
    }

    /// Props snapshot for the next render.
    pub fn props(&self) -> SearchBarProps {
        SearchBarProps {
            search_terms: self.terms.clone(),
            is_focussed: self.is_focussed,
            keep_focussed: self.keep_focussed,
            is_focus: self.is_focus,
            is_searching_term: self.is_searching,
            is_side_bar_right: self.side_bar_right,
            suggestion_providers: Arc::clone(&self.providers),
        }
    }

    /// Suggestions for the current terms.
    pub fn suggestions(&self) -> Option<SuggestionResults> {
        collect_suggestions(&self.providers, &self.terms)
    }

    /// Focus the bar through the handle it exposed on mount.
    ///
    /// Returns false if the bar has not mounted yet.
    pub fn request_focus(&self) -> bool {
        match &self.focus_handle {
            Some(handle) => {
                handle.focus();
                true
            }
            None => false,
        }
    }

    pub fn request_blur(&self) {
        if let Some(handle) = &self.focus_handle {
            handle.blur();
        }
    }

    /// Complete the suggestion at `index`, as if highlighted and entered.
    pub fn select_suggestion(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.highlight_via_key = false;
        self.handle_enter_key();
    }

    /// Mark `request_id` as finished. Returns false for a superseded
    /// request, whose results must be dropped.
    pub fn finish_search(&mut self, request_id: u64) -> bool {
        if request_id != self.request_id {
            log::debug!(
                "dropping stale results for request {} (current {})",
                request_id,
                self.request_id
            );
            return false;
        }
        self.is_searching = false;
        true
    }

    /// Words and phrases of the active query, for result highlighting.
    pub fn highlight_terms(&self) -> Vec<String> {
        self.active_query
            .as_ref()
            .map(|query| {
                query
                    .highlight_terms()
                    .into_iter()
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn reset_highlight(&mut self) {
        self.highlighted = None;
        self.highlight_via_key = false;
    }
}

impl SearchBarHandlers for SearchState {
    fn handle_change(&mut self, value: String) {
        self.terms = value;
        self.reset_highlight();
    }

    fn handle_enter_key(&mut self) {
        let selected = self.highlighted.and_then(|index| {
            self.suggestions()
                .and_then(|results| {
                    let item = results.items.get(index)?;
                    Some(complete_term(&self.terms, &results.matched_pretext, &item.term))
                })
        });

        match selected {
            Some(completed) => {
                log::debug!("completed suggestion: {:?}", completed);
                self.terms = completed;
                self.keep_focussed = true;
                self.reset_highlight();
            }
            None => self.handle_submit(),
        }
    }

    fn handle_submit(&mut self) {
        let terms = self.terms.trim().to_string();
        if terms.is_empty() {
            return;
        }

        self.request_id += 1;
        self.keep_focussed = false;
        self.is_focussed = false;
        self.reset_highlight();
        self.is_searching = true;
        self.active_query = Some(SearchQuery::parse(&terms));

        log::info!("search #{}: {:?}", self.request_id, terms);
        let _ = self.action_tx.send(AppAction::RunSearch {
            request_id: self.request_id,
            terms,
        });
    }

    fn handle_clear(&mut self) {
        self.terms.clear();
        self.reset_highlight();
        // Bump so an in-flight search cannot repopulate the results
        self.request_id += 1;
        self.is_searching = false;
        self.active_query = None;
        let _ = self.action_tx.send(AppAction::ClearResults);
    }

    fn handle_focus(&mut self) {
        self.is_focussed = true;
    }

    fn handle_blur(&mut self) {
        self.is_focussed = false;
        self.keep_focussed = false;
        self.reset_highlight();
    }

    fn update_highlighted_search_hint(&mut self, index_delta: i32, changed_via_key_press: bool) {
        let count = self.suggestions().map_or(0, |results| results.len());
        if count == 0 {
            self.reset_highlight();
            return;
        }

        let count = count as i64;
        let next = match self.highlighted {
            None if index_delta < 0 => count - 1,
            None => 0,
            Some(index) => (index as i64 + i64::from(index_delta)).rem_euclid(count),
        };
        self.highlighted = Some(next as usize);
        self.highlight_via_key = changed_via_key_press;
    }

    fn get_focus(&mut self, focus: FocusHandle) {
        self.focus_handle = Some(focus);
    }
}
