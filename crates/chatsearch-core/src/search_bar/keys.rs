//! Key classification for the search bar.

use crossterm::event::{KeyCode, KeyEvent};

/// Keys with a dedicated meaning in the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Escape,
    Down,
    Up,
    Enter,
    Other,
}

impl SearchKey {
    /// Classify by key code alone; modifiers do not change the meaning.
    pub fn classify(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => SearchKey::Escape,
            KeyCode::Down => SearchKey::Down,
            KeyCode::Up => SearchKey::Up,
            KeyCode::Enter => SearchKey::Enter,
            _ => SearchKey::Other,
        }
    }
}

/// What the bar did with a key-down event.
///
/// `prevent_default` means the key must not reach default text handling;
/// `stop_propagation` means enclosing handlers must not see it either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl KeyOutcome {
    pub(crate) const PREVENTED: Self = Self {
        prevent_default: true,
        stop_propagation: false,
    };

    pub(crate) const STOPPED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// Whether the key was consumed by the bar.
    pub fn is_handled(&self) -> bool {
        self.prevent_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_classify_ignores_modifiers() {
        let shift_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(SearchKey::classify(&shift_enter), SearchKey::Enter);

        let ctrl_up = KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL);
        assert_eq!(SearchKey::classify(&ctrl_up), SearchKey::Up);
    }

    #[test]
    fn test_classify_other() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(SearchKey::classify(&key), SearchKey::Other);
        assert!(!KeyOutcome::default().is_handled());
    }
}
