//! Application entry: settings resolution and startup

use std::path::{Path, PathBuf};

use lucky_app::config::{self, DrawVariant, Settings};
use lucky_core::logging;
use lucky_core::{Error, Result, ResultExt};
use tracing::{debug, error, info};

/// Launch options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// File whose lines seed the names list
    pub names_file: Option<PathBuf>,
    /// Overrides `draw.variant`
    pub variant: Option<DrawVariant>,
    /// Forces `preferences.remove_winner` on
    pub remove_winner: bool,
    /// Forces `preferences.play_sound` off
    pub mute: bool,
    /// Explicit config file instead of `.lucky/config.toml`
    pub config: Option<PathBuf>,
}

/// Build the settings and initial names text for a launch.
///
/// An explicit `--config` must load; the default location falls back to
/// defaults with a warning. A names file that cannot be read is fatal.
pub fn resolve(options: &LaunchOptions, base: &Path) -> Result<(Settings, String)> {
    let mut settings = match &options.config {
        Some(path) => config::load_settings_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_settings(base),
    };

    if let Some(variant) = options.variant {
        settings.draw.variant = variant;
    }
    if options.remove_winner {
        settings.preferences.remove_winner = true;
    }
    if options.mute {
        settings.preferences.play_sound = false;
    }

    let names = match &options.names_file {
        Some(path) => config::load_names_file(path)?,
        None => String::new(),
    };

    Ok((settings, names))
}

/// Line printed after the terminal is restored when the draw screen fails
pub fn failure_hint(log_dir: &Path) -> String {
    format!("Lucky Draw stopped with an error. Logs: {}", log_dir.display())
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let base = std::env::current_dir().unwrap_or_default();
    let (settings, names) = resolve(&options, &base)?;
    debug!("Resolved settings: {:?}", settings);

    let result = lucky_tui::run(settings, names).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!("{}", failure_hint(&logging::log_directory()));
    }

    info!("Lucky Draw exiting");
    result
}
