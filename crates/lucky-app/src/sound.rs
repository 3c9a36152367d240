//! Audio output seam.
//!
//! The draw controller only says when sound should start, stop or chime;
//! implementations decide how (the TUI rings the terminal bell).

/// Plays the draw's sound cues
#[cfg_attr(test, mockall::automock)]
pub trait SoundOutput {
    /// Begin the looping sound that accompanies a running draw
    fn start_ambient(&mut self);

    /// Stop the looping sound and rewind it. Must be safe to call when idle.
    fn stop_ambient(&mut self);

    /// Play the one-shot sound for a revealed winner
    fn chime(&mut self);
}

/// Output that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentOutput;

impl SoundOutput for SilentOutput {
    fn start_ambient(&mut self) {}

    fn stop_ambient(&mut self) {}

    fn chime(&mut self) {}
}
