//! Settings and names file loading

use std::path::Path;

use lucky_core::prelude::*;

use super::types::Settings;

/// Directory holding Lucky Draw configuration, relative to the working directory
pub const LUCKY_DIR: &str = ".lucky";

/// Settings file name inside [`LUCKY_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Load `.lucky/config.toml` under `base`, falling back to defaults.
///
/// A missing file is normal. An unreadable, malformed or invalid file is
/// logged and replaced by the defaults so the draw screen always starts.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = base.join(LUCKY_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_file(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load and validate an explicit settings file
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Read the raw text of a names file (one name per line)
pub fn load_names_file(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::names_file(path, e.to_string()))?;
    info!(
        "Loaded {} names from {}",
        lucky_core::parse_pool(&raw).len(),
        path.display()
    );
    Ok(raw)
}
