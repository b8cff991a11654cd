//! Localized UI strings.
//!
//! Message ids follow the `component.key` convention; every lookup carries
//! its own English default so a missing override never blanks the UI.

use std::collections::HashMap;

/// Lookup table of localized message overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Return the override for `id`, or `default` when none is configured.
    pub fn localize<'a>(&'a self, id: &str, default: &'a str) -> &'a str {
        self.overrides.get(id).map(String::as_str).unwrap_or(default)
    }
}

impl From<HashMap<String, String>> for Messages {
    fn from(overrides: HashMap<String, String>) -> Self {
        Self::new(overrides)
    }
}
