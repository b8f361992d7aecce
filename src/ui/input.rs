//! Input module - keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::UiAction;

/// Map keyboard input to UI actions
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UiAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UiAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(UiAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UiAction::MoveRight),

        // Select / toggle
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Activate),

        // Actions
        KeyCode::Char('a') | KeyCode::Char('A') => Some(UiAction::AddRow),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Tab => Some(UiAction::SwitchScreen),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(UiAction::ClearDaily),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
