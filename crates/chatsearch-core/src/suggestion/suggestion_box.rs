//! Text-entry widget with provider-driven autocomplete.
//!
//! The box is a controlled input: its value mirrors what the parent last
//! rendered, and edits are reported through `handle_change` rather than
//! applied locally.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::provider::{ProviderList, SuggestionResults, collect_suggestions};
use crate::search_bar::SearchBarHandlers;

/// Rendering and behaviour switches set by the owning component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuggestionBoxOptions {
    /// Offer a clear affordance while the value is non-empty
    pub clearable: bool,
    /// Render provider section headers above the list
    pub render_dividers: bool,
}

pub struct SuggestionBox {
    value: String,
    focused: bool,
    providers: Option<ProviderList>,
    results: Option<SuggestionResults>,
    options: SuggestionBoxOptions,
}

impl SuggestionBox {
    pub fn new(options: SuggestionBoxOptions) -> Self {
        Self {
            value: String::new(),
            focused: false,
            providers: None,
            results: None,
            options,
        }
    }

    /// Mirror the parent's value and re-query providers when either changed.
    pub fn set_value(&mut self, value: &str, providers: &ProviderList) {
        let providers_changed = self
            .providers
            .as_ref()
            .is_none_or(|current| !Arc::ptr_eq(current, providers));

        if value == self.value && !providers_changed {
            return;
        }

        self.value.clear();
        self.value.push_str(value);
        self.providers = Some(Arc::clone(providers));
        self.results = collect_suggestions(providers, value);
        log::trace!(
            "suggestions for {:?}: {}",
            value,
            self.results.as_ref().map_or(0, SuggestionResults::len)
        );
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> SuggestionBoxOptions {
        self.options
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Focus the input, firing `handle_focus` only on a transition.
    pub fn focus(&mut self, handlers: &mut dyn SearchBarHandlers) {
        if !self.focused {
            self.focused = true;
            handlers.handle_focus();
        }
    }

    /// Blur the input, firing `handle_blur` only on a transition.
    pub fn blur(&mut self, handlers: &mut dyn SearchBarHandlers) {
        if self.focused {
            self.focused = false;
            handlers.handle_blur();
        }
    }

    /// Current provider results, regardless of focus.
    pub fn suggestions(&self) -> Option<&SuggestionResults> {
        self.results.as_ref()
    }

    /// Results worth drawing: the list is only open while focused.
    pub fn visible_suggestions(&self) -> Option<&SuggestionResults> {
        self.results.as_ref().filter(|_| self.focused)
    }

    /// Whether the clear affordance is currently shown.
    pub fn shows_clear(&self) -> bool {
        self.options.clearable && !self.value.is_empty()
    }

    /// Invoke the clear affordance.
    pub fn clear(&mut self, handlers: &mut dyn SearchBarHandlers) {
        if self.shows_clear() {
            handlers.handle_clear();
        }
    }

    /// Default text-input behaviour. Returns true if the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent, handlers: &mut dyn SearchBarHandlers) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear(handlers);
                true
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut next = self.value.clone();
                next.push(c);
                handlers.handle_change(next);
                true
            }
            KeyCode::Backspace => {
                if !self.value.is_empty() {
                    let mut next = self.value.clone();
                    next.pop();
                    handlers.handle_change(next);
                }
                true
            }
            _ => false,
        }
    }
}
