//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),

        // Flip
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Flip),

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::NextTheme),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::NextDifficulty),

        // Settings
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleSound),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ToggleDarkMode),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
