//! Settings panel state: field focus and the names editor cursor.
//!
//! The text itself lives in the draw controller's [`NameList`]; the panel only
//! tracks where the cursor is. The cursor is a byte offset that always sits on
//! a char boundary and is re-clamped before every edit, since a winner removal
//! can shorten the text while the panel is open.
//!
//! [`NameList`]: lucky_core::NameList

use crate::message::NamesEdit;

/// Focusable fields, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Names,
    RemoveWinner,
    PlaySound,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::Names => SettingsField::RemoveWinner,
            SettingsField::RemoveWinner => SettingsField::PlaySound,
            SettingsField::PlaySound => SettingsField::Names,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SettingsField::Names => SettingsField::PlaySound,
            SettingsField::RemoveWinner => SettingsField::Names,
            SettingsField::PlaySound => SettingsField::RemoveWinner,
        }
    }
}

/// View state of the settings panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPanelState {
    pub focus: SettingsField,
    cursor: usize,
}

impl SettingsPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset focus to the editor with the cursor after the last character
    pub fn open(&mut self, text: &str) {
        self.focus = SettingsField::Names;
        self.cursor = text.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based (row, column) of the cursor, column counted in chars
    pub fn cursor_position(&self, text: &str) -> (usize, usize) {
        let cursor = clamp_to_boundary(text, self.cursor);
        let before = &text[..cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].chars().count();
        (row, col)
    }

    /// Apply one edit to `text`
    pub fn apply(&mut self, edit: NamesEdit, text: &mut String) {
        self.cursor = clamp_to_boundary(text, self.cursor);

        match edit {
            NamesEdit::Insert(c) => {
                text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }
            NamesEdit::Newline => {
                text.insert(self.cursor, '\n');
                self.cursor += 1;
            }
            NamesEdit::Backspace => {
                if let Some((start, _)) = text[..self.cursor].char_indices().next_back() {
                    text.remove(start);
                    self.cursor = start;
                }
            }
            NamesEdit::Delete => {
                if self.cursor < text.len() {
                    text.remove(self.cursor);
                }
            }
            NamesEdit::Left => {
                if let Some((start, _)) = text[..self.cursor].char_indices().next_back() {
                    self.cursor = start;
                }
            }
            NamesEdit::Right => {
                if let Some(c) = text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            NamesEdit::Home => {
                self.cursor = line_start(text, self.cursor);
            }
            NamesEdit::End => {
                self.cursor = line_end(text, self.cursor);
            }
            NamesEdit::Up => {
                let start = line_start(text, self.cursor);
                if start > 0 {
                    let col = text[start..self.cursor].chars().count();
                    let prev_start = line_start(text, start - 1);
                    self.cursor = offset_at_column(text, prev_start, col);
                }
            }
            NamesEdit::Down => {
                let end = line_end(text, self.cursor);
                if end < text.len() {
                    let start = line_start(text, self.cursor);
                    let col = text[start..self.cursor].chars().count();
                    self.cursor = offset_at_column(text, end + 1, col);
                }
            }
        }
    }
}

fn clamp_to_boundary(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

fn line_start(text: &str, cursor: usize) -> usize {
    text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .find('\n')
        .map(|i| cursor + i)
        .unwrap_or(text.len())
}

/// Byte offset of `col` chars into the line starting at `start`, clamped to its end
fn offset_at_column(text: &str, start: usize, col: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .char_indices()
        .nth(col)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> (SettingsPanelState, String) {
        let mut state = SettingsPanelState::new();
        state.open(text);
        (state, text.to_string())
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let field = SettingsField::Names;
        assert_eq!(field.next().next().next(), SettingsField::Names);
        assert_eq!(field.prev(), SettingsField::PlaySound);
        assert_eq!(field.next().prev(), SettingsField::Names);
    }

    #[test]
    fn test_typing_appends_at_end() {
        let (mut state, mut text) = editor("Alice");
        state.apply(NamesEdit::Newline, &mut text);
        for c in "Bob".chars() {
            state.apply(NamesEdit::Insert(c), &mut text);
        }
        assert_eq!(text, "Alice\nBob");
        assert_eq!(state.cursor_position(&text), (1, 3));
    }

    #[test]
    fn test_backspace_and_delete() {
        let (mut state, mut text) = editor("Alice");
        state.apply(NamesEdit::Backspace, &mut text);
        assert_eq!(text, "Alic");
        state.apply(NamesEdit::Home, &mut text);
        state.apply(NamesEdit::Delete, &mut text);
        assert_eq!(text, "lic");
        state.apply(NamesEdit::Backspace, &mut text);
        assert_eq!(text, "lic");
    }

    #[test]
    fn test_multibyte_editing() {
        let (mut state, mut text) = editor("Zoë");
        state.apply(NamesEdit::Left, &mut text);
        state.apply(NamesEdit::Insert('é'), &mut text);
        assert_eq!(text, "Zoéë");
        state.apply(NamesEdit::Backspace, &mut text);
        state.apply(NamesEdit::Backspace, &mut text);
        assert_eq!(text, "Zë");
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let (mut state, mut text) = editor("Alice\nBo\nCarol");
        state.apply(NamesEdit::Up, &mut text);
        assert_eq!(state.cursor_position(&text), (1, 2));
        state.apply(NamesEdit::Up, &mut text);
        assert_eq!(state.cursor_position(&text), (0, 2));
        state.apply(NamesEdit::End, &mut text);
        state.apply(NamesEdit::Down, &mut text);
        assert_eq!(state.cursor_position(&text), (1, 2));
        state.apply(NamesEdit::Down, &mut text);
        assert_eq!(state.cursor_position(&text), (2, 2));
        state.apply(NamesEdit::Down, &mut text);
        assert_eq!(state.cursor_position(&text), (2, 2));
    }

    #[test]
    fn test_cursor_clamped_after_external_shrink() {
        let (mut state, _) = editor("Alice\nBob\nCarol");
        let mut text = "Alice\nCarol".to_string();
        state.apply(NamesEdit::Insert('!'), &mut text);
        assert_eq!(text, "Alice\nCarol!");
    }
}
