//! Built-in providers for the search modifiers understood by the message
//! search: `from:`, `in:`, `on:`, `before:`, `after:` and `-` exclusions.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};

use super::provider::{
    ProviderList, Suggestion, SuggestionKind, SuggestionProvider, SuggestionResults,
};
use crate::utils::text::split_last_word;

/// Number of days offered by the date picker, counting back from today.
const DATE_SUGGESTION_DAYS: u64 = 14;

const DATE_MODIFIERS: [&str; 3] = ["on:", "before:", "after:"];

const SEARCH_HINTS: [(&str, &str); 6] = [
    ("from:", "Messages from a user"),
    ("in:", "Messages in a channel"),
    ("on:", "Messages on a date"),
    ("before:", "Messages before a date"),
    ("after:", "Messages after a date"),
    ("-", "Exclude a word"),
];

/// Case-insensitive `strip_prefix` for ASCII modifiers.
fn strip_modifier<'a>(word: &'a str, modifier: &str) -> Option<&'a str> {
    let head = word.get(..modifier.len())?;
    head.eq_ignore_ascii_case(modifier)
        .then(|| &word[modifier.len()..])
}

fn starts_with_ci(candidate: &str, partial: &str) -> bool {
    candidate
        .get(..partial.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(partial))
}

/// Completes user names after `from:`.
#[derive(Debug, Clone, Default)]
pub struct SearchUserProvider {
    users: Vec<String>,
}

impl SearchUserProvider {
    pub fn new(users: Vec<String>) -> Self {
        Self { users }
    }
}

impl SuggestionProvider for SearchUserProvider {
    fn handle_pretext(&self, pretext: &str) -> Option<SuggestionResults> {
        let (_, word) = split_last_word(pretext);
        let partial = strip_modifier(word, "from:")?;

        let items = self
            .users
            .iter()
            .filter(|user| starts_with_ci(user, partial))
            .map(|user| Suggestion::new(format!("from:{}", user), format!("@{}", user), ""))
            .collect();

        Some(SuggestionResults {
            matched_pretext: word.to_string(),
            items,
            divider: Some("Users".to_string()),
            kind: SuggestionKind::List,
        })
    }
}

/// Completes channel names after `in:`.
#[derive(Debug, Clone, Default)]
pub struct SearchChannelProvider {
    channels: Vec<String>,
}

impl SearchChannelProvider {
    pub fn new(channels: Vec<String>) -> Self {
        Self { channels }
    }
}

impl SuggestionProvider for SearchChannelProvider {
    fn handle_pretext(&self, pretext: &str) -> Option<SuggestionResults> {
        let (_, word) = split_last_word(pretext);
        let partial = strip_modifier(word, "in:")?;

        let items = self
            .channels
            .iter()
            .filter(|channel| starts_with_ci(channel, partial))
            .map(|channel| {
                Suggestion::new(format!("in:{}", channel), format!("~{}", channel), "")
            })
            .collect();

        Some(SuggestionResults {
            matched_pretext: word.to_string(),
            items,
            divider: Some("Channels".to_string()),
            kind: SuggestionKind::List,
        })
    }
}

/// Offers recent dates after `on:`, `before:` and `after:`.
#[derive(Debug, Clone, Default)]
pub struct SearchDateProvider {
    /// Fixed "today", used by tests; defaults to the local date
    today: Option<NaiveDate>,
}

impl SearchDateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl SuggestionProvider for SearchDateProvider {
    fn handle_pretext(&self, pretext: &str) -> Option<SuggestionResults> {
        let (_, word) = split_last_word(pretext);
        let (modifier, partial) = DATE_MODIFIERS
            .iter()
            .find_map(|modifier| strip_modifier(word, modifier).map(|rest| (*modifier, rest)))?;

        let today = self.today();
        let items = (0..DATE_SUGGESTION_DAYS)
            .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
            .map(|date| (date, date.format("%Y-%m-%d").to_string()))
            .filter(|(_, formatted)| formatted.starts_with(partial))
            .map(|(date, formatted)| {
                Suggestion::new(
                    format!("{}{}", modifier, formatted),
                    formatted,
                    date.format("%a").to_string(),
                )
            })
            .collect();

        Some(SuggestionResults {
            matched_pretext: word.to_string(),
            items,
            divider: None,
            kind: SuggestionKind::Date,
        })
    }
}

/// Lists the search modifiers while the current word could still become one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchHintProvider;

impl SuggestionProvider for SearchHintProvider {
    fn handle_pretext(&self, pretext: &str) -> Option<SuggestionResults> {
        let (_, word) = split_last_word(pretext);

        let items: Vec<Suggestion> = SEARCH_HINTS
            .iter()
            .filter(|(term, _)| term.len() > word.len() && starts_with_ci(term, word))
            .map(|(term, description)| Suggestion::new(*term, *term, *description))
            .collect();

        if items.is_empty() {
            return None;
        }

        Some(SuggestionResults {
            matched_pretext: word.to_string(),
            items,
            divider: Some("Search options".to_string()),
            kind: SuggestionKind::List,
        })
    }
}

/// The provider chain used by the sidebar search: users, channels, dates,
/// then modifier hints.
pub fn default_providers(users: Vec<String>, channels: Vec<String>) -> ProviderList {
    Arc::new(vec![
        Box::new(SearchUserProvider::new(users)),
        Box::new(SearchChannelProvider::new(channels)),
        Box::new(SearchDateProvider::new()),
        Box::new(SearchHintProvider),
    ])
}
