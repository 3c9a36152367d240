//! Application state (Model in TEA pattern)

use lucky_core::{CandidatePicker, DrawController, RandomPicker};

use crate::config::Settings;
use crate::settings_panel::SettingsPanelState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Draw screen
    #[default]
    Normal,

    /// Settings panel open over the draw screen
    Settings,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// Names, preferences and the draw state machine
    pub draw: DrawController,

    /// Source of randomness for ticks
    pub picker: Box<dyn CandidatePicker>,

    /// Settings panel focus and editor cursor
    pub settings_panel: SettingsPanelState,

    /// Presentation (fullscreen) mode, as confirmed by the display host
    pub fullscreen: bool,

    /// Transient notice shown in the footer until the next key press
    pub notice: Option<String>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), String::new())
    }

    /// Build state from loaded settings and the initial names text
    pub fn with_settings(settings: Settings, names: impl Into<String>) -> Self {
        let draw = DrawController::new(
            settings.draw.strategy(),
            (&settings.preferences).into(),
        )
        .with_names(names);

        Self {
            ui_mode: UiMode::Normal,
            settings,
            draw,
            picker: Box::new(RandomPicker::from_entropy()),
            settings_panel: SettingsPanelState::new(),
            fullscreen: false,
            notice: None,
            quitting: false,
        }
    }

    /// Replace the picker (seeded or scripted draws)
    pub fn with_picker(mut self, picker: impl CandidatePicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn open_settings(&mut self) {
        self.settings_panel.open(self.draw.names().raw());
        self.ui_mode = UiMode::Settings;
    }

    pub fn close_settings(&mut self) {
        self.ui_mode = UiMode::Normal;
    }
}
