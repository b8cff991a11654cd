//! Autocomplete for the search input.
//!
//! Providers inspect the text typed so far (the *pretext*) and offer
//! completions for the word under the cursor. The first provider that
//! recognises the pretext wins.

mod provider;
mod providers;
mod suggestion_box;

pub use provider::{
    ProviderList, Suggestion, SuggestionKind, SuggestionProvider, SuggestionResults,
    collect_suggestions, complete_term,
};
pub use providers::{
    SearchChannelProvider, SearchDateProvider, SearchHintProvider, SearchUserProvider,
    default_providers,
};
pub use suggestion_box::{SuggestionBox, SuggestionBoxOptions};
