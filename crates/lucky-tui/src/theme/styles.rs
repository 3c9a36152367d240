//! Semantic style builders for the draw screen.

use lucky_core::DrawPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::KEYBINDING)
}

/// "Black on Cyan" - used for enabled buttons and focused items
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Style of the displayed name for the current phase
pub fn candidate(phase: DrawPhase, is_placeholder: bool) -> Style {
    if is_placeholder {
        return text_muted();
    }
    match phase {
        DrawPhase::Running => Style::default().fg(palette::PHASE_RUNNING),
        DrawPhase::Stopped => Style::default()
            .fg(palette::PHASE_WINNER)
            .add_modifier(Modifier::BOLD),
        DrawPhase::Idle => text_primary(),
    }
}

/// Style of a button, dimmed when the action is unavailable
pub fn button(enabled: bool) -> Style {
    if enabled {
        focused_selected()
    } else {
        text_muted().add_modifier(Modifier::DIM)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
