//! Configuration types

use std::time::Duration;

use lucky_core::{
    DrawStrategy, Error, IntervalPolicy, Preferences, Result, SoundStyle, StopTrigger,
};
use serde::Deserialize;

/// Which draw behaviour to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawVariant {
    /// Constant rapid spin, stopped by the user
    #[default]
    Fixed,
    /// Slowing spin that stops itself
    Decelerating,
}

impl DrawVariant {
    pub fn label(&self) -> &'static str {
        match self {
            DrawVariant::Fixed => "fixed",
            DrawVariant::Decelerating => "decelerating",
        }
    }
}

/// Application settings (.lucky/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub draw: DrawSettings,

    #[serde(default)]
    pub preferences: PreferenceSettings,

    #[serde(default)]
    pub sound: SoundSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Reject timings the draw controller cannot run with
    pub fn validate(&self) -> Result<()> {
        let draw = &self.draw;
        if draw.fixed_period_ms == 0 {
            return Err(Error::config_invalid("draw.fixed_period_ms must be > 0"));
        }
        if draw.initial_interval_ms == 0 {
            return Err(Error::config_invalid("draw.initial_interval_ms must be > 0"));
        }
        if draw.interval_step_ms == 0 {
            return Err(Error::config_invalid("draw.interval_step_ms must be > 0"));
        }
        if draw.interval_ceiling_ms < draw.initial_interval_ms {
            return Err(Error::config_invalid(format!(
                "draw.interval_ceiling_ms ({}) is below draw.initial_interval_ms ({})",
                draw.interval_ceiling_ms, draw.initial_interval_ms
            )));
        }
        if self.sound.ambient_ring_ms == 0 {
            return Err(Error::config_invalid("sound.ambient_ring_ms must be > 0"));
        }
        Ok(())
    }
}

/// Draw timing settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DrawSettings {
    #[serde(default)]
    pub variant: DrawVariant,

    /// Tick period of the fixed variant
    #[serde(default = "default_fixed_period_ms")]
    pub fixed_period_ms: u64,

    /// First tick interval of the decelerating variant
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Interval growth per tick
    #[serde(default = "default_interval_step_ms")]
    pub interval_step_ms: u64,

    /// The draw stops once the interval grows past this
    #[serde(default = "default_interval_ceiling_ms")]
    pub interval_ceiling_ms: u64,
}

fn default_fixed_period_ms() -> u64 {
    10
}

fn default_initial_interval_ms() -> u64 {
    100
}

fn default_interval_step_ms() -> u64 {
    200
}

fn default_interval_ceiling_ms() -> u64 {
    2000
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            variant: DrawVariant::default(),
            fixed_period_ms: default_fixed_period_ms(),
            initial_interval_ms: default_initial_interval_ms(),
            interval_step_ms: default_interval_step_ms(),
            interval_ceiling_ms: default_interval_ceiling_ms(),
        }
    }
}

impl DrawSettings {
    /// Build the controller strategy for the configured variant
    pub fn strategy(&self) -> DrawStrategy {
        match self.variant {
            DrawVariant::Fixed => DrawStrategy {
                stop_trigger: StopTrigger::Manual,
                interval: IntervalPolicy::Constant {
                    period: Duration::from_millis(self.fixed_period_ms),
                },
                sound: SoundStyle::Ambient,
            },
            DrawVariant::Decelerating => DrawStrategy {
                stop_trigger: StopTrigger::Deadline,
                interval: IntervalPolicy::Growing {
                    initial: Duration::from_millis(self.initial_interval_ms),
                    step: Duration::from_millis(self.interval_step_ms),
                    ceiling: Duration::from_millis(self.interval_ceiling_ms),
                },
                sound: SoundStyle::Chime,
            },
        }
    }
}

/// Initial values of the user toggles
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreferenceSettings {
    #[serde(default)]
    pub remove_winner: bool,

    #[serde(default = "default_true")]
    pub play_sound: bool,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            remove_winner: false,
            play_sound: true,
        }
    }
}

impl From<&PreferenceSettings> for Preferences {
    fn from(settings: &PreferenceSettings) -> Self {
        Preferences {
            remove_winner_on_stop: settings.remove_winner,
            play_sound_on_stop: settings.play_sound,
        }
    }
}

/// Terminal audio settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoundSettings {
    /// Gap between bells while the ambient loop plays
    #[serde(default = "default_ambient_ring_ms")]
    pub ambient_ring_ms: u64,
}

fn default_ambient_ring_ms() -> u64 {
    400
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            ambient_ring_ms: default_ambient_ring_ms(),
        }
    }
}

/// Text shown on the draw screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_headline")]
    pub headline: String,

    /// Shown until the first candidate is drawn
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_title() -> String {
    "Lucky Draw".to_string()
}

fn default_headline() -> String {
    "The winner is".to_string()
}

fn default_placeholder() -> String {
    "Winner ?".to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            headline: default_headline(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.draw.variant, DrawVariant::Fixed);
        assert_eq!(settings.draw.fixed_period_ms, 10);
        assert!(!settings.preferences.remove_winner);
        assert!(settings.preferences.play_sound);
        assert_eq!(settings.ui.placeholder, "Winner ?");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[draw]
variant = "decelerating"
interval_ceiling_ms = 3000

[preferences]
remove_winner = true
"#,
        )
        .unwrap();

        assert_eq!(settings.draw.variant, DrawVariant::Decelerating);
        assert_eq!(settings.draw.initial_interval_ms, 100);
        assert_eq!(settings.draw.interval_ceiling_ms, 3000);
        assert!(settings.preferences.remove_winner);
        assert!(settings.preferences.play_sound);
        assert_eq!(settings.ui.title, "Lucky Draw");
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result: std::result::Result<Settings, _> = toml::from_str(
            r#"
[draw]
variant = "sideways"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_ceiling_below_initial() {
        let mut settings = Settings::default();
        settings.draw.initial_interval_ms = 500;
        settings.draw.interval_ceiling_ms = 100;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("interval_ceiling_ms"));
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let mut settings = Settings::default();
        settings.draw.interval_step_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_decelerating_strategy_from_settings() {
        let draw = DrawSettings {
            variant: DrawVariant::Decelerating,
            ..DrawSettings::default()
        };
        assert_eq!(draw.strategy(), DrawStrategy::decelerating());
    }

    #[test]
    fn test_fixed_strategy_from_settings() {
        assert_eq!(DrawSettings::default().strategy(), DrawStrategy::fixed_interval());
    }

    #[test]
    fn test_preferences_conversion() {
        let prefs: Preferences = (&PreferenceSettings {
            remove_winner: true,
            play_sound: false,
        })
            .into();
        assert!(prefs.remove_winner_on_stop);
        assert!(!prefs.play_sound_on_stop);
    }
}
