//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, timers and sound, then runs the loop
//! - `run_loop`: drains timer/signal messages, renders, polls input

use std::time::Duration;

use lucky_app::config::Settings;
use lucky_app::message::Message;
use lucky_app::signals;
use lucky_app::state::AppState;
use lucky_app::{process_message, ActionContext, TimerRegistry};
use lucky_core::prelude::*;
use tokio::sync::mpsc;

use crate::bell::TerminalBell;
use crate::display::TuiDisplay;
use crate::{event, render, terminal};

/// Run the draw screen until the user quits or a signal arrives
pub async fn run(settings: Settings, names: String) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(Error::terminal_init)?;
    let size = match term.size() {
        Ok(size) => size,
        Err(e) => {
            ratatui::restore();
            return Err(Error::terminal_init(e));
        }
    };
    let mut display = TuiDisplay::new(size.width, size.height);
    let mut sound = TerminalBell::stdout(Duration::from_millis(settings.sound.ambient_ring_ms));

    let mut state = AppState::with_settings(settings, names);
    info!(
        "Lucky Draw starting: {} names, {} variant",
        state.draw.names().pool_len(),
        state.settings.draw.variant.label()
    );

    // Unified message channel for timer ticks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());
    let mut timers = TimerRegistry::new(msg_tx);

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        &mut timers,
        &mut sound,
        &mut display,
    );

    // Release the draw's timer and sound even when the loop failed
    if !state.should_quit() {
        let mut ctx = ActionContext {
            timers: &mut timers,
            sound: &mut sound,
            display: &mut display,
        };
        process_message(&mut state, Message::Quit, &mut ctx);
    }
    timers.cancel_all();

    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    timers: &mut TimerRegistry,
    sound: &mut TerminalBell<std::io::Stdout>,
    display: &mut TuiDisplay,
) -> Result<()> {
    while !state.should_quit() {
        let size = terminal.size()?;
        display.resize(size.width, size.height);

        let mut ctx = ActionContext {
            timers: &mut *timers,
            sound: &mut *sound,
            display: &mut *display,
        };

        // Process external messages (ticks, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &mut ctx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &mut ctx);
        }
    }

    Ok(())
}
