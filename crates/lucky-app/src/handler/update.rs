//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tracing::{debug, error, info};

use super::{keys::handle_key, settings, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and the actions to perform
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::effects(state.draw.teardown())
        }

        Message::Key(key) => {
            state.notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Draw Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleDraw => {
            if state.draw.is_running() {
                UpdateResult::message(Message::StopDraw)
            } else {
                UpdateResult::message(Message::StartDraw)
            }
        }

        Message::StartDraw => UpdateResult::effects(state.draw.start()),

        Message::StopDraw => UpdateResult::effects(state.draw.stop()),

        Message::DrawTick { handle } => {
            UpdateResult::effects(state.draw.tick(handle, state.picker.as_mut()))
        }

        // ─────────────────────────────────────────────────────────
        // Settings Panel Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenSettings => settings::handle_open(state),
        Message::CloseSettings => settings::handle_close(state),
        Message::SettingsNextField => settings::handle_next_field(state),
        Message::SettingsPrevField => settings::handle_prev_field(state),
        Message::NamesEdit(edit) => settings::handle_names_edit(state, edit),
        Message::ToggleRemoveWinner => settings::handle_toggle_remove_winner(state),
        Message::TogglePlaySound => settings::handle_toggle_play_sound(state),

        // ─────────────────────────────────────────────────────────
        // Presentation Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFullscreen => UpdateResult::action(UpdateAction::RequestFullscreen {
            enable: !state.fullscreen,
        }),

        Message::FullscreenChanged { enabled } => {
            debug!("Fullscreen {}", if enabled { "entered" } else { "left" });
            state.fullscreen = enabled;
            UpdateResult::none()
        }

        Message::FullscreenDenied { reason } => {
            error!("Error attempting to enable fullscreen mode: {}", reason);
            state.notice = Some(format!("Fullscreen unavailable: {}", reason));
            UpdateResult::none()
        }
    }
}
