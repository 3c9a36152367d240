//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{Message, NamesEdit};
use crate::settings_panel::SettingsField;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Settings => handle_key_settings(state, key),
    }
}

/// Handle key events on the draw screen
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Main button: start, or stop a manual draw
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleDraw),

        InputKey::Char('f' | 'F') => Some(Message::ToggleFullscreen),

        InputKey::Char('o' | ',') => Some(Message::OpenSettings),

        // Esc leaves presentation mode first
        InputKey::Esc if state.fullscreen => Some(Message::ToggleFullscreen),
        InputKey::Esc => Some(Message::Quit),

        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while the settings panel is open
fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc | InputKey::CharCtrl('s') => return Some(Message::CloseSettings),
        InputKey::Tab => return Some(Message::SettingsNextField),
        InputKey::BackTab => return Some(Message::SettingsPrevField),
        _ => {}
    }

    match state.settings_panel.focus {
        SettingsField::Names => handle_key_names_editor(key),
        SettingsField::RemoveWinner => handle_key_checkbox(key, Message::ToggleRemoveWinner),
        SettingsField::PlaySound => handle_key_checkbox(key, Message::TogglePlaySound),
    }
}

/// Handle key events in the names editor (all printable keys are text)
fn handle_key_names_editor(key: InputKey) -> Option<Message> {
    let edit = match key {
        InputKey::Char(c) => NamesEdit::Insert(c),
        InputKey::Enter => NamesEdit::Newline,
        InputKey::Backspace => NamesEdit::Backspace,
        InputKey::Delete => NamesEdit::Delete,
        InputKey::Left => NamesEdit::Left,
        InputKey::Right => NamesEdit::Right,
        InputKey::Up => NamesEdit::Up,
        InputKey::Down => NamesEdit::Down,
        InputKey::Home => NamesEdit::Home,
        InputKey::End => NamesEdit::End,
        _ => return None,
    };
    Some(Message::NamesEdit(edit))
}

/// Handle key events on a focused checkbox
fn handle_key_checkbox(key: InputKey, toggle: Message) -> Option<Message> {
    match key {
        InputKey::Char(' ') | InputKey::Enter => Some(toggle),
        InputKey::Up | InputKey::Char('k') => Some(Message::SettingsPrevField),
        InputKey::Down | InputKey::Char('j') => Some(Message::SettingsNextField),
        _ => None,
    }
}
