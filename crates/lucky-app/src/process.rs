//! Message processing and action dispatch
//!
//! Runs a message through `update()`, executes the resulting actions against
//! the timer registry, sound output and display host, and feeds follow-up
//! messages (including those produced by actions) back through the loop
//! until it settles.

use std::collections::VecDeque;

use tracing::trace;

use crate::display::DisplayHost;
use crate::handler;
use crate::message::Message;
use crate::sound::SoundOutput;
use crate::state::AppState;
use crate::timer::TimerRegistry;
use crate::UpdateAction;

/// Side-effect executors available to the loop
pub struct ActionContext<'a> {
    pub timers: &'a mut TimerRegistry,
    pub sound: &'a mut dyn SoundOutput,
    pub display: &'a mut dyn DisplayHost,
}

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, ctx: &mut ActionContext<'_>) {
    let mut queue = VecDeque::from([message]);

    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        for action in result.actions {
            if let Some(follow_up) = handle_action(action, ctx) {
                queue.push_back(follow_up);
            }
        }

        if let Some(next) = result.message {
            queue.push_back(next);
        }
    }
}

/// Execute one action, returning a message to feed back into the loop
pub fn handle_action(action: UpdateAction, ctx: &mut ActionContext<'_>) -> Option<Message> {
    trace!("action: {:?}", action);
    match action {
        UpdateAction::ScheduleTick { handle, delay } => {
            ctx.timers.schedule(handle, delay);
            None
        }
        UpdateAction::CancelTick { handle } => {
            ctx.timers.cancel(handle);
            None
        }
        UpdateAction::StartAmbientSound => {
            ctx.sound.start_ambient();
            None
        }
        UpdateAction::StopAmbientSound => {
            ctx.sound.stop_ambient();
            None
        }
        UpdateAction::PlayChime => {
            ctx.sound.chime();
            None
        }
        UpdateAction::RequestFullscreen { enable } => match ctx.display.set_fullscreen(enable) {
            Ok(()) => Some(Message::FullscreenChanged { enabled: enable }),
            Err(e) => Some(Message::FullscreenDenied {
                reason: match e {
                    lucky_core::Error::FullscreenDenied { reason } => reason,
                    other => other.to_string(),
                },
            }),
        },
    }
}
