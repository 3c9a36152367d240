//! Settings panel handlers
//!
//! None of these touch the draw phase: the panel can be opened, edited and
//! closed while a draw is running, and edits reach the next tick directly.

use tracing::debug;

use crate::message::NamesEdit;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_settings();
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.close_settings();
    debug!("Settings closed, pool has {} names", state.draw.names().pool_len());
    UpdateResult::none()
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    state.settings_panel.focus = state.settings_panel.focus.next();
    UpdateResult::none()
}

pub fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    state.settings_panel.focus = state.settings_panel.focus.prev();
    UpdateResult::none()
}

pub fn handle_names_edit(state: &mut AppState, edit: NamesEdit) -> UpdateResult {
    state
        .settings_panel
        .apply(edit, state.draw.names_mut().raw_mut());
    UpdateResult::none()
}

pub fn handle_toggle_remove_winner(state: &mut AppState) -> UpdateResult {
    let prefs = state.draw.preferences_mut();
    prefs.remove_winner_on_stop = !prefs.remove_winner_on_stop;
    debug!("remove_winner_on_stop = {}", prefs.remove_winner_on_stop);
    UpdateResult::none()
}

pub fn handle_toggle_play_sound(state: &mut AppState) -> UpdateResult {
    let prefs = state.draw.preferences_mut();
    prefs.play_sound_on_stop = !prefs.play_sound_on_stop;
    debug!("play_sound_on_stop = {}", prefs.play_sound_on_stop);
    UpdateResult::none()
}
