//! Lucky Draw Library
//!
//! A terminal raffle: names cycle on screen until a winner is drawn.

pub mod app;

// Re-export main entry point
pub use app::{failure_hint, resolve, run, LaunchOptions};
