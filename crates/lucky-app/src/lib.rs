//! lucky-app - Application state and orchestration for Lucky Draw
//!
//! This crate implements the TEA (The Elm Architecture) loop around the draw
//! controller: messages, the update function, action dispatch, cancellable
//! tick timers, configuration loading and the sound/display seams.

pub mod config;
pub mod display;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod settings_panel;
pub mod shell;
pub mod signals;
pub mod sound;
pub mod state;
pub mod timer;

// Re-export primary types
pub use display::DisplayHost;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, NamesEdit};
pub use process::{process_message, ActionContext};
pub use settings_panel::{SettingsField, SettingsPanelState};
pub use shell::{shell_model, ShellModel};
pub use sound::{SilentOutput, SoundOutput};
pub use state::{AppState, UiMode};
pub use timer::TimerRegistry;
