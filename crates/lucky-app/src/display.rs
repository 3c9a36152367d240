//! Display host seam for fullscreen (presentation) mode

use lucky_core::Result;

/// Host environment able to switch the draw screen into fullscreen
#[cfg_attr(test, mockall::automock)]
pub trait DisplayHost {
    /// Enter or leave fullscreen.
    ///
    /// Returns [`lucky_core::Error::FullscreenDenied`] when the host refuses;
    /// the caller logs the denial and keeps its current mode.
    fn set_fullscreen(&mut self, enable: bool) -> Result<()>;
}
