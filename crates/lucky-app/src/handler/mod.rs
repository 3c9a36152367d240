//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `settings`: Settings panel handlers

pub(crate) mod keys;
pub(crate) mod settings;
pub(crate) mod update;


use std::time::Duration;

use lucky_core::{DrawEffect, TimerHandle};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Deliver `Message::DrawTick { handle }` after `delay`
    ScheduleTick { handle: TimerHandle, delay: Duration },

    /// Abort a scheduled tick
    CancelTick { handle: TimerHandle },

    /// Start the looping draw sound
    StartAmbientSound,

    /// Stop and rewind the looping draw sound
    StopAmbientSound,

    /// Play the one-shot winner sound
    PlayChime,

    /// Ask the display host to enter/leave fullscreen
    RequestFullscreen { enable: bool },
}

impl From<DrawEffect> for UpdateAction {
    fn from(effect: DrawEffect) -> Self {
        match effect {
            DrawEffect::ScheduleTick { handle, delay } => {
                UpdateAction::ScheduleTick { handle, delay }
            }
            DrawEffect::CancelTick(handle) => UpdateAction::CancelTick { handle },
            DrawEffect::StartAmbientSound => UpdateAction::StartAmbientSound,
            DrawEffect::StopAmbientSound => UpdateAction::StopAmbientSound,
            DrawEffect::PlayChime => UpdateAction::PlayChime,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    /// Wrap the controller's effects as loop actions
    pub fn effects(effects: Vec<DrawEffect>) -> Self {
        Self {
            message: None,
            actions: effects.into_iter().map(UpdateAction::from).collect(),
        }
    }
}
