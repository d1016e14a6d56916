// =====================================================
// FILE: src/input/keyboard.rs - KEY BINDINGS
// =====================================================

use crate::core::prelude::*;
use crossterm::event::{KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ToTop,
    ToBottom,
    Clear,
    Quit,
    NoAction,
}

pub struct KeyboardManager;

impl KeyboardManager {
    pub fn new() -> Self {
        Self
    }

    pub fn get_action(&self, key: &KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::NoAction;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::ScrollUp,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::ScrollDown,
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) | (KeyCode::Char(' '), _) => KeyAction::PageDown,
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::ToTop,
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => KeyAction::ToBottom,
            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::Clear,
            _ => KeyAction::NoAction,
        }
    }
}

crate::impl_default!(KeyboardManager, Self::new());

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_scroll_keys() {
        let manager = KeyboardManager::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(manager.get_action(&up), KeyAction::ScrollUp);

        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&j), KeyAction::ScrollDown);

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(manager.get_action(&end), KeyAction::ToBottom);

        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(manager.get_action(&shift_g), KeyAction::ToBottom);
    }

    #[test]
    fn test_ctrl_c_quits_but_c_clears() {
        let manager = KeyboardManager::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(manager.get_action(&ctrl_c), KeyAction::Quit);

        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&c), KeyAction::Clear);
    }

    #[test]
    fn test_unbound_and_released_keys() {
        let manager = KeyboardManager::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(manager.get_action(&x), KeyAction::NoAction);

        let mut released = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        released.kind = KeyEventKind::Release;
        assert_eq!(manager.get_action(&released), KeyAction::NoAction);
    }
}
