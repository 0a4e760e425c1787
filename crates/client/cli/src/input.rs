//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the event loop stays
//! agnostic about concrete key bindings or the specifics of `crossterm` events.

use combat_core::Navigation;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the menu cursor.
    Navigate(Navigation),
    /// Confirm the highlighted entry (or acknowledge the result).
    Confirm,
    /// Leave the current submenu.
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
///
/// Arrows, WASD and hjkl move; Enter/Space confirm; Esc/Backspace cancel;
/// `q` or Ctrl+C quit.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => KeyAction::Navigate(Navigation::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            KeyAction::Navigate(Navigation::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            KeyAction::Navigate(Navigation::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            KeyAction::Navigate(Navigation::Right)
        }
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Confirm,
        KeyCode::Esc | KeyCode::Backspace => KeyAction::Cancel,
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
