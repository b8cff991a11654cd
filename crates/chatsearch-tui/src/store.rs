//! In-memory chat message store and the search it serves.
//!
//! Messages come from a JSON file or from a built-in sample. Queries use the
//! same modifiers the suggestion providers complete.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TuiError, TuiResult};

/// Generic loading state for async data.
///
/// This enum enforces proper handling of all loading states at compile time,
/// preventing bugs like displaying stale data while loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// No search has been run
    #[default]
    Idle,
    /// A search is in flight
    Loading,
    /// Search finished
    Loaded(T),
    /// Search failed with error message
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub channel: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// A parsed search string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub words: Vec<String>,
    pub phrases: Vec<String>,
    pub excluded: Vec<String>,
    pub from: Vec<String>,
    pub channels: Vec<String>,
    pub on: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
    pub after: Option<NaiveDate>,
}

fn strip_ci<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    let head = token.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &token[prefix.len()..])
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
    if date.is_none() {
        log::debug!("ignoring malformed date {:?}", value);
    }
    date
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

impl SearchQuery {
    /// Parse search terms. Malformed dates are ignored.
    pub fn parse(terms: &str) -> Self {
        let mut query = SearchQuery::default();
        let mut rest = terms.trim();

        while !rest.is_empty() {
            if let Some(quoted) = rest.strip_prefix('"') {
                let end = quoted.find('"').unwrap_or(quoted.len());
                let phrase = quoted[..end].trim();
                if !phrase.is_empty() {
                    query.phrases.push(phrase.to_string());
                }
                rest = quoted.get(end + 1..).unwrap_or("").trim_start();
                continue;
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            query.push_token(&rest[..end]);
            rest = rest[end..].trim_start();
        }

        query
    }

    fn push_token(&mut self, token: &str) {
        if let Some(user) = strip_ci(token, "from:") {
            let user = user.trim_start_matches('@');
            if !user.is_empty() {
                self.from.push(user.to_string());
            }
        } else if let Some(channel) = strip_ci(token, "in:") {
            let channel = channel.trim_start_matches('~');
            if !channel.is_empty() {
                self.channels.push(channel.to_string());
            }
        } else if let Some(date) = strip_ci(token, "on:") {
            self.on = parse_date(date).or(self.on);
        } else if let Some(date) = strip_ci(token, "before:") {
            self.before = parse_date(date).or(self.before);
        } else if let Some(date) = strip_ci(token, "after:") {
            self.after = parse_date(date).or(self.after);
        } else if let Some(word) = token.strip_prefix('-').filter(|w| !w.is_empty()) {
            self.excluded.push(word.to_string());
        } else {
            self.words.push(token.to_string());
        }
    }

    /// Whether the query places no constraint at all.
    pub fn is_empty(&self) -> bool {
        *self == SearchQuery::default()
    }

    /// Words and phrases to highlight in results.
    pub fn highlight_terms(&self) -> Vec<&str> {
        self.words
            .iter()
            .chain(self.phrases.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether `message` matches, with dates taken as local calendar days.
    pub fn matches(&self, message: &Message) -> bool {
        self.matches_in(message, &Local)
    }

    /// Like [`SearchQuery::matches`], with dates taken as calendar days in `tz`.
    pub fn matches_in<Tz: TimeZone>(&self, message: &Message, tz: &Tz) -> bool {
        let date = message.timestamp.with_timezone(tz).date_naive();

        (self.from.is_empty() || self.from.iter().any(|u| u.eq_ignore_ascii_case(&message.user)))
            && (self.channels.is_empty()
                || self
                    .channels
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(&message.channel)))
            && self.on.is_none_or(|on| date == on)
            && self.before.is_none_or(|before| date < before)
            && self.after.is_none_or(|after| date > after)
            && self
                .words
                .iter()
                .chain(self.phrases.iter())
                .all(|w| contains_ci(&message.text, w))
            && !self.excluded.iter().any(|w| contains_ci(&message.text, w))
    }
}

/// Searchable collection of messages.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Load a JSON array of messages.
    pub fn load(path: &Path) -> TuiResult<Self> {
        let store_error = |message: String| TuiError::Store {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| store_error(e.to_string()))?;
        let messages: Vec<Message> =
            serde_json::from_str(&content).map_err(|e| store_error(e.to_string()))?;

        log::info!("loaded {} messages from {}", messages.len(), path.display());
        Ok(Self::new(messages))
    }

    /// Built-in sample conversation ending at `now`.
    pub fn sample_at(now: DateTime<Utc>) -> Self {
        const SAMPLE: [(&str, &str, i64, &str); 14] = [
            ("town-square", "alice", 0, "Deploy to staging finished, please test the search bar"),
            ("town-square", "bob", 1, "Search results look right, highlighting works"),
            ("dev", "carol", 3, "Refactored the focus scheduling in the search bar"),
            ("dev", "alice", 5, "Escape should blur the input without closing the sidebar"),
            ("off-topic", "dave", 8, "Anyone up for lunch?"),
            ("releases", "bob", 24, "Release 5.31 is tagged, deploy planned for tomorrow"),
            ("dev", "dave", 26, "Date suggestions now show the last two weeks"),
            ("town-square", "carol", 30, "Reminder: standup moved to 10:00"),
            ("releases", "alice", 50, "Rolled back the deploy, cache warmup was too slow"),
            ("off-topic", "bob", 72, "The new keyboard shortcuts are great"),
            ("dev", "bob", 96, "Arrow keys move the highlighted suggestion now"),
            ("town-square", "dave", 120, "Welcome to the new channel layout"),
            ("releases", "carol", 170, "Changelog for 5.30 is up"),
            ("dev", "carol", 240, "Started on the suggestion providers for from: and in:"),
        ];

        let messages = SAMPLE
            .iter()
            .enumerate()
            .map(|(i, (channel, user, hours_ago, text))| Message {
                id: i as u64 + 1,
                channel: channel.to_string(),
                user: user.to_string(),
                timestamp: now - Duration::hours(*hours_ago),
                text: text.to_string(),
            })
            .collect();

        Self::new(messages)
    }

    pub fn sample() -> Self {
        Self::sample_at(Utc::now())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Distinct user names, sorted.
    pub fn users(&self) -> Vec<String> {
        let users: BTreeSet<&str> = self.messages.iter().map(|m| m.user.as_str()).collect();
        users.into_iter().map(String::from).collect()
    }

    /// Distinct channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let channels: BTreeSet<&str> = self.messages.iter().map(|m| m.channel.as_str()).collect();
        channels.into_iter().map(String::from).collect()
    }

    /// Matching messages, newest first. An empty query matches nothing.
    pub fn search(&self, query: &SearchQuery) -> Vec<Message> {
        self.search_in(query, &Local)
    }

    /// Like [`MessageStore::search`], with date modifiers resolved in `tz`.
    pub fn search_in<Tz: TimeZone>(&self, query: &SearchQuery, tz: &Tz) -> Vec<Message> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| query.matches_in(m, tz))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results
    }

    /// Messages of `channel` in chronological order.
    pub fn channel_messages(&self, channel: &str) -> Vec<&Message> {
        let mut messages: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.channel == channel)
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }
}
