//! Main TUI runner - entry point and event loop
//!
//! The loop alternates draining external messages (signal handler),
//! drawing a frame, and polling the terminal. Rendering is synchronous
//! and never blocks; the poll timeout paces the loop.

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{handler, signals};
use crate::common::prelude::*;
use crate::config::Settings;

use super::{event, render};

/// Run the TUI application until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Initialize terminal (restores on panic)
    let mut terminal = ratatui::init();

    let mut state = AppState::with_settings(settings);

    // Unified message channel for the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx);

    // Run the main loop
    let result = run_loop(&mut terminal, &mut state, msg_rx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            handler::update(state, msg);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(msg) = event::poll()? {
            handler::update(state, msg);
        }
    }

    debug!("Event loop finished");
    Ok(())
}
