//! Terminal bell as the draw's sound output.
//!
//! The ambient sound is the bell rung on a fixed period by a background task;
//! the chime is a single ring.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lucky_app::SoundOutput;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const BEL: &[u8] = b"\x07";

/// Rings BEL on a shared writer (stdout in the app)
pub struct TerminalBell<W: Write + Send + 'static> {
    out: Arc<Mutex<W>>,
    period: Duration,
    ambient: Option<JoinHandle<()>>,
}

impl TerminalBell<std::io::Stdout> {
    pub fn stdout(period: Duration) -> Self {
        Self::new(std::io::stdout(), period)
    }
}

impl<W: Write + Send + 'static> TerminalBell<W> {
    pub fn new(out: W, period: Duration) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            period,
            ambient: None,
        }
    }

    pub fn is_ringing(&self) -> bool {
        self.ambient.is_some()
    }

    fn ring(out: &Mutex<W>) {
        let Ok(mut guard) = out.lock() else {
            warn!("bell writer poisoned");
            return;
        };
        if let Err(e) = guard.write_all(BEL).and_then(|_| guard.flush()) {
            warn!("Failed to ring bell: {}", e);
        }
    }
}

impl<W: Write + Send + 'static> SoundOutput for TerminalBell<W> {
    fn start_ambient(&mut self) {
        self.stop_ambient();

        let out = Arc::clone(&self.out);
        let period = self.period;
        self.ambient = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                Self::ring(&out);
            }
        }));
        debug!("ambient bell started ({:?})", period);
    }

    fn stop_ambient(&mut self) {
        if let Some(task) = self.ambient.take() {
            task.abort();
            debug!("ambient bell stopped");
        }
    }

    fn chime(&mut self) {
        Self::ring(&self.out);
    }
}

impl<W: Write + Send + 'static> Drop for TerminalBell<W> {
    fn drop(&mut self) {
        self.stop_ambient();
    }
}
