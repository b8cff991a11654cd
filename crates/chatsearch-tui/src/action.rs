//! Application actions for event-driven architecture.
//!
//! Background tasks never touch the `App` directly. They send an
//! `AppAction` that the run loop applies at the start of its next turn.

use crate::store::Message;

/// Application-level actions processed by the run loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Run a search for the given terms (request_id, terms)
    RunSearch { request_id: u64, terms: String },

    /// Search finished (request_id, matching messages newest first)
    SearchCompleted(u64, Vec<Message>),

    /// Search task failed (request_id, error)
    SearchFailed(u64, String),

    /// Drop the results panel contents
    ClearResults,
}
