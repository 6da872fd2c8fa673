//! Terminal event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::Action;

/// Handles a crossterm event and returns an optional Action.
#[must_use]
pub fn handle_event(event: &Event) -> Option<Action> {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        return handle_key_press(key);
    }
    None
}

/// Handles key press events.
fn handle_key_press(key_event: &KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('d') | KeyCode::Tab => Some(Action::ToggleLayout),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelectionUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelectionDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::JumpToBottom),
        KeyCode::Char('c') => Some(Action::CopyValue),
        KeyCode::Char('o') => Some(Action::OpenInBrowser),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
