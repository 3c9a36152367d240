//! Presentation shell: what the draw screen shows, derived from state.
//!
//! Kept free of any rendering types so affordance rules can be tested
//! directly against [`AppState`].

use lucky_core::{DrawPhase, StopTrigger};

use crate::state::AppState;

/// Everything the draw screen needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellModel<'a> {
    pub title: &'a str,
    pub headline: &'a str,
    /// Displayed candidate, or the placeholder before any draw
    pub display_text: &'a str,
    pub is_placeholder: bool,
    pub phase: DrawPhase,
    /// Start is offered when idle/stopped with a non-empty pool
    pub start_enabled: bool,
    /// Stop is only part of manual draws
    pub stop_visible: bool,
    pub stop_enabled: bool,
    pub pool_size: usize,
    pub fullscreen: bool,
}

/// Derive the draw screen model from state
pub fn shell_model(state: &AppState) -> ShellModel<'_> {
    let ui = &state.settings.ui;
    let draw = &state.draw;
    let (display_text, is_placeholder) = match draw.displayed() {
        Some(name) => (name, false),
        None => (ui.placeholder.as_str(), true),
    };

    ShellModel {
        title: &ui.title,
        headline: &ui.headline,
        display_text,
        is_placeholder,
        phase: draw.phase(),
        start_enabled: draw.can_start(),
        stop_visible: draw.strategy().stop_trigger == StopTrigger::Manual,
        stop_enabled: draw.can_stop(),
        pool_size: draw.names().pool_len(),
        fullscreen: state.fullscreen,
    }
}
