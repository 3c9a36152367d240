//! Presentation mode as the fullscreen host.
//!
//! A terminal app already owns the whole window, so "fullscreen" hides the
//! chrome and lets the banner fill the screen. The host refuses when the
//! terminal is too small for the banner and buttons.

use lucky_app::DisplayHost;
use lucky_core::prelude::*;

/// Smallest terminal that presentation mode will accept
pub const MIN_PRESENTATION_WIDTH: u16 = 40;
pub const MIN_PRESENTATION_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy)]
pub struct TuiDisplay {
    width: u16,
    height: u16,
}

impl TuiDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Record the current terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

impl DisplayHost for TuiDisplay {
    fn set_fullscreen(&mut self, enable: bool) -> Result<()> {
        if enable
            && (self.width < MIN_PRESENTATION_WIDTH || self.height < MIN_PRESENTATION_HEIGHT)
        {
            return Err(Error::fullscreen_denied(format!(
                "terminal is {}x{}, needs at least {}x{}",
                self.width, self.height, MIN_PRESENTATION_WIDTH, MIN_PRESENTATION_HEIGHT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_terminal_allows_fullscreen() {
        let mut display = TuiDisplay::new(80, 24);
        assert!(display.set_fullscreen(true).is_ok());
    }

    #[test]
    fn test_small_terminal_denies_fullscreen() {
        let mut display = TuiDisplay::new(30, 24);
        let err = display.set_fullscreen(true).unwrap_err();
        assert!(matches!(err, Error::FullscreenDenied { .. }));
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("30x24"));
    }

    #[test]
    fn test_leaving_fullscreen_always_allowed() {
        let mut display = TuiDisplay::new(10, 3);
        assert!(display.set_fullscreen(false).is_ok());
    }

    #[test]
    fn test_resize_updates_decision() {
        let mut display = TuiDisplay::new(20, 5);
        assert!(display.set_fullscreen(true).is_err());
        display.resize(100, 30);
        assert!(display.set_fullscreen(true).is_ok());
    }
}
