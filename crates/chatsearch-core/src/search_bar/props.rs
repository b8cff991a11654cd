use crate::suggestion::ProviderList;

/// Immutable snapshot of everything the parent hands the search bar for one
/// render.
#[derive(Clone)]
pub struct SearchBarProps {
    /// Current text shown in the input
    pub search_terms: String,
    /// Parent believes the input has focus
    pub is_focussed: bool,
    /// Parent wants focus kept across updates
    pub keep_focussed: bool,
    /// Focus on mount, provided the terms are empty
    pub is_focus: bool,
    /// A search is in flight
    pub is_searching_term: bool,
    /// This instance lives in the right-hand sidebar
    pub is_side_bar_right: bool,
    /// Forwarded verbatim to the suggestion box
    pub suggestion_providers: ProviderList,
}

impl SearchBarProps {
    /// Element ids for this instance.
    pub fn ids(&self) -> SearchBarIds {
        SearchBarIds::new(self.is_side_bar_right)
    }
}

/// Element ids that tie the bar to its container and help popup.
///
/// The right-hand sidebar hosts a second bar, so its ids are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarIds {
    pub container: &'static str,
    pub search_box: &'static str,
    pub help_popup: &'static str,
}

impl SearchBarIds {
    pub fn new(is_side_bar_right: bool) -> Self {
        if is_side_bar_right {
            Self {
                container: "sbrSearchFormContainer",
                search_box: "sbrSearchBox",
                help_popup: "sbr-searchbar-help-popup",
            }
        } else {
            Self {
                container: "searchFormContainer",
                search_box: "searchBox",
                help_popup: "searchbar-help-popup",
            }
        }
    }
}
