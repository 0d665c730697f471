//! Key binding definitions shared by the widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding: one or more key combinations triggering a described
/// action.
pub struct Binding {
    /// The key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Human-readable description of the action.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside it.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for a single key combination.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self {
            keys: vec![key],
            description: description.into(),
            enabled: true,
        }
    }

    /// Create a binding for multiple key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether the given key event matches any of this binding's
    /// combinations. Always `false` when disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// A key combination with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key combination with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// A key combination with the Shift modifier.
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn matches_any_combination() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Down),
                KeyCombination::new(KeyCode::Char('j')),
            ],
            "Down",
        );
        assert!(b.matches(&key(KeyCode::Down)));
        assert!(b.matches(&key(KeyCode::Char('j'))));
        assert!(!b.matches(&key(KeyCode::Up)));
    }

    #[test]
    fn modifier_must_be_held() {
        let b = Binding::new(KeyCombination::ctrl(KeyCode::Char('r')), "Reveal");
        assert!(!b.matches(&key(KeyCode::Char('r'))));
        assert!(b.matches(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Enter), "Confirm").enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
    }
}
