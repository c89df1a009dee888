use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Action;

/// Maps terminal key events onto logical game actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::SteerLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::SteerRight),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
