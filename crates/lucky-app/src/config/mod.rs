//! Configuration file parsing for Lucky Draw
//!
//! Supports `.lucky/config.toml` in the working directory, plus an optional
//! plain-text names file used to seed the pool.

pub mod settings;
pub mod types;

pub use settings::{
    load_names_file, load_settings, load_settings_file, CONFIG_FILENAME, LUCKY_DIR,
};
pub use types::*;
