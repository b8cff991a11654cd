//! # chatsearch-core
//!
//! Core library for the chat sidebar search bar.
//!
//! This crate holds everything about the search bar that does not depend on
//! a particular terminal renderer: the control itself, its autocomplete
//! collaborators, and the shared configuration and error types used by
//! `chatsearch-tui`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chatsearch_core::prelude::*;
//!
//! let mut bar = SearchBar::new(Messages::default());
//! // Once per update, then again while focus requests keep arriving:
//! bar.render(parent.props(), &mut parent);
//! bar.run_deferred(&mut parent);
//! // For each key-down while the input is focused:
//! let outcome = bar.handle_key(key, &mut parent);
//! ```
//!
//! ## Modules
//!
//! - [`search_bar`]: the control, its props, handler trait and focus queue
//! - [`suggestion`]: suggestion providers and the suggestion box input
//! - [`storage`]: TOML configuration
//! - [`i18n`]: localized message lookup
//! - [`utils`]: text helpers
//! - [`error`]: error types

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::i18n::Messages;
    pub use crate::search_bar::{
        FocusHandle, KeyOutcome, SearchBar, SearchBarHandlers, SearchBarIds, SearchBarProps,
    };
    pub use crate::storage::config::Config;
    pub use crate::suggestion::{
        ProviderList, Suggestion, SuggestionKind, SuggestionProvider, SuggestionResults,
        default_providers,
    };
}

pub mod error;
pub mod i18n;
pub mod search_bar;
pub mod storage;
pub mod suggestion;
pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
