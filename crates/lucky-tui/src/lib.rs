//! lucky-tui - Terminal UI for Lucky Draw
//!
//! This crate provides the ratatui-based draw screen. It drives the TEA loop
//! from lucky-app and adds terminal rendering, event polling, the terminal
//! bell as sound output and presentation mode as the fullscreen host.

pub mod bell;
pub mod display;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
