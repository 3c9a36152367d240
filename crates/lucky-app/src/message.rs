//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use lucky_core::TimerHandle;

/// Edit applied to the names text at the settings panel cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamesEdit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Force quit (Ctrl+C, `q`, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Draw Messages
    // ─────────────────────────────────────────────────────────
    /// Start when idle, stop when running (the main button)
    ToggleDraw,
    /// Begin a draw
    StartDraw,
    /// Stop a manual draw and reveal the winner
    StopDraw,
    /// A scheduled tick fired
    DrawTick { handle: TimerHandle },

    // ─────────────────────────────────────────────────────────
    // Settings Panel Messages
    // ─────────────────────────────────────────────────────────
    OpenSettings,
    CloseSettings,
    SettingsNextField,
    SettingsPrevField,
    /// Edit the raw names text
    NamesEdit(NamesEdit),
    ToggleRemoveWinner,
    TogglePlaySound,

    // ─────────────────────────────────────────────────────────
    // Presentation Messages
    // ─────────────────────────────────────────────────────────
    /// Ask the display host to enter/leave fullscreen
    ToggleFullscreen,
    /// The display host applied a fullscreen change
    FullscreenChanged { enabled: bool },
    /// The display host refused a fullscreen request
    FullscreenDenied { reason: String },
}
