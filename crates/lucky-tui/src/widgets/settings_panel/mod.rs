//! Settings panel widget - modal over the draw screen
//!
//! Shows the names editor and the two draw preferences. The draw keeps
//! running underneath while the panel is open.


use lucky_app::{SettingsField, SettingsPanelState};
use lucky_core::Preferences;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;
use crate::theme::styles;

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 20;

/// Modal settings panel
pub struct SettingsPanel<'a> {
    names: &'a str,
    panel: &'a SettingsPanelState,
    preferences: Preferences,
    pool_size: usize,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(
        names: &'a str,
        panel: &'a SettingsPanelState,
        preferences: Preferences,
        pool_size: usize,
    ) -> Self {
        Self {
            names,
            panel,
            preferences,
            pool_size,
        }
    }

    fn render_names(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.panel.focus == SettingsField::Names;
        let title = format!(" Names ({}) ", self.pool_size);
        let block = styles::glass_block(focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (cursor_row, cursor_col) = self.panel.cursor_position(self.names);
        let visible = inner.height as usize;
        let scroll = (cursor_row + 1).saturating_sub(visible);

        // str::lines drops a trailing empty line that the cursor may sit on
        let rows: Vec<&str> = self.names.split('\n').collect();

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible)
            .map(|(row, text)| {
                if focused && row == cursor_row {
                    line_with_cursor(text, cursor_col)
                } else {
                    Line::styled(*text, styles::text_primary())
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_checkbox(&self, field: SettingsField, label: &str, checked: bool) -> Line<'static> {
        let mark = if checked { "[x] " } else { "[ ] " };
        let style = if self.panel.focus == field {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{}{}", mark, label), style),
        ])
    }
}

/// Render a line with the cursor cell highlighted (a blank cell at end of line)
fn line_with_cursor(text: &str, col: usize) -> Line<'static> {
    let before: String = text.chars().take(col).collect();
    let at: String = text.chars().nth(col).map_or(" ".to_string(), String::from);
    let after: String = text.chars().skip(col + 1).collect();

    Line::from(vec![
        Span::styled(before, styles::text_primary()),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(after, styles::text_primary()),
    ])
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = styles::modal_block(" Settings ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [names, _, remove, sound, _, help] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_names(names, buf);

        self.render_checkbox(
            SettingsField::RemoveWinner,
            "Remove winner from list",
            self.preferences.remove_winner_on_stop,
        )
        .render(remove, buf);
        self.render_checkbox(
            SettingsField::PlaySound,
            "Play sound",
            self.preferences.play_sound_on_stop,
        )
        .render(sound, buf);

        Line::from(vec![
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" next field  ", styles::text_muted()),
            Span::styled("Space", styles::keybinding()),
            Span::styled(" toggle  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ])
        .centered()
        .render(help, buf);
    }
}
