//! Application action handling.
//!
//! Processes AppAction events and updates application state accordingly.

use std::sync::Arc;

use crate::action::AppAction;
use crate::store::{Message, SearchQuery};

use super::App;

impl App {
    /// Handle an application action.
    pub(super) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::RunSearch { request_id, terms } => {
                self.run_search(request_id, terms);
            }
            AppAction::SearchCompleted(request_id, messages) => {
                self.handle_search_completed(request_id, messages);
            }
            AppAction::SearchFailed(request_id, error) => {
                if self.search.finish_search(request_id) {
                    log::warn!("search #{} failed: {}", request_id, error);
                    self.status_bar.set_message(format!("Search failed: {}", error));
                    self.results.set_error(error);
                }
            }
            AppAction::ClearResults => {
                self.results.reset();
                self.channel.clear();
                self.status_bar.set_message("");
            }
        }
    }

    /// Search the store off the UI thread.
    fn run_search(&mut self, request_id: u64, terms: String) {
        if request_id != self.search.request_id {
            return;
        }

        self.results.set_loading();
        self.status_bar
            .set_message(format!("Searching for '{}'...", terms));

        let store = Arc::clone(&self.store);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let query = SearchQuery::parse(&terms);
            match tokio::task::spawn_blocking(move || store.search(&query)).await {
                Ok(messages) => {
                    let _ = tx.send(AppAction::SearchCompleted(request_id, messages));
                }
                Err(e) => {
                    let _ = tx.send(AppAction::SearchFailed(request_id, e.to_string()));
                }
            }
        });
    }

    fn handle_search_completed(&mut self, request_id: u64, messages: Vec<Message>) {
        if !self.search.finish_search(request_id) {
            return;
        }

        log::info!("search #{} found {} messages", request_id, messages.len());
        self.status_bar.set_message(match messages.len() {
            0 => "No results".to_string(),
            1 => "1 result".to_string(),
            n => format!("{} results", n),
        });

        self.results
            .set_results(messages, self.search.highlight_terms());
        self.show_selected_channel();
    }

    /// Open the channel of the selected result in the content pane.
    pub(super) fn show_selected_channel(&mut self) {
        match self.results.selected() {
            Some(message) => self.channel.show(&self.store, message),
            None => self.channel.clear(),
        }
    }
}
