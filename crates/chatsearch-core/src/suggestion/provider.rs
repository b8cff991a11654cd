use std::sync::Arc;

/// Shared, ordered list of providers handed down through props.
pub type ProviderList = Arc<Vec<Box<dyn SuggestionProvider>>>;

/// A single completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Text that replaces the matched pretext
    pub term: String,
    /// Text shown in the list
    pub label: String,
    /// Secondary text shown next to the label
    pub description: String,
}

impl Suggestion {
    pub fn new(
        term: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// How a result set should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionKind {
    #[default]
    List,
    /// Rendered by the date picker widget
    Date,
}

/// Completions offered by one provider for one pretext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResults {
    /// Trailing part of the input these items would replace
    pub matched_pretext: String,
    pub items: Vec<Suggestion>,
    /// Section header rendered above the items
    pub divider: Option<String>,
    pub kind: SuggestionKind,
}

impl SuggestionResults {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Source of autocomplete candidates.
pub trait SuggestionProvider: Send + Sync {
    /// Offer completions for `pretext`, or `None` if this provider does not
    /// recognise it.
    fn handle_pretext(&self, pretext: &str) -> Option<SuggestionResults>;
}

/// Ask each provider in order; the first non-empty answer wins.
pub fn collect_suggestions(
    providers: &[Box<dyn SuggestionProvider>],
    pretext: &str,
) -> Option<SuggestionResults> {
    providers
        .iter()
        .filter_map(|provider| provider.handle_pretext(pretext))
        .find(|results| !results.is_empty())
}

/// Replace `matched_pretext` at the end of `value` with `term`.
///
/// A trailing space is appended so typing continues with a new word, except
/// for bare modifiers (`from:`, `-`) that still expect an argument.
pub fn complete_term(value: &str, matched_pretext: &str, term: &str) -> String {
    let keep = value.len().saturating_sub(matched_pretext.len());
    let prefix = value.get(..keep).unwrap_or(value);

    let mut completed = String::with_capacity(prefix.len() + term.len() + 1);
    completed.push_str(prefix);
    completed.push_str(term);
    if !(term.ends_with(':') || term == "-") {
        completed.push(' ');
    }
    completed
}
