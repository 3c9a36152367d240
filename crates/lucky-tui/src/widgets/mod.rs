//! Custom widget components

mod banner;
mod controls;
mod footer;
mod header;
pub mod settings_panel;

pub use banner::WinnerBanner;
pub use controls::Controls;
pub use footer::Footer;
pub use header::MainHeader;
pub use settings_panel::SettingsPanel;
