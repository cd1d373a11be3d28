//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    ToggleHistory,
    RefreshHistory,
    Cancel,
    InsertChar(char),
    Backspace,
    ClearInput,
    ScrollUp,
    ScrollDown,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::RefreshHistory),
            KeyCode::Char('u') => Some(Action::ClearInput),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::F(2) => Some(Action::ToggleHistory),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Up | KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char(c) if !c.is_control() => Some(Action::InsertChar(c)),
        _ => None,
    }
}
