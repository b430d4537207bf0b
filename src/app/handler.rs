//! Message handling (Update in TEA pattern)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::message::Message;
use super::state::{AppPhase, AppState};

/// Convert a key event to a message
pub fn handle_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        // Line scrolling
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown),

        // Page scrolling
        KeyCode::PageUp | KeyCode::Char('b') => Some(Message::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') | KeyCode::Char('f') => Some(Message::PageDown),

        // Jump to edges
        KeyCode::Home | KeyCode::Char('g') => Some(Message::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}

/// Apply a message to the state
pub fn update(state: &mut AppState, msg: Message) {
    match msg {
        Message::Key(key) => {
            if let Some(msg) = handle_key(key) {
                update(state, msg);
            }
        }
        Message::Quit => state.phase = AppPhase::Quitting,
        Message::ScrollUp => {
            let step = state.settings.ui.scroll_step;
            state.content_view_state.scroll_up(step);
        }
        Message::ScrollDown => {
            let step = state.settings.ui.scroll_step;
            state.content_view_state.scroll_down(step);
        }
        Message::ScrollToTop => state.content_view_state.scroll_to_top(),
        Message::ScrollToBottom => state.content_view_state.scroll_to_bottom(),
        Message::PageUp => state.content_view_state.page_up(),
        Message::PageDown => state.content_view_state.page_down(),
        Message::Tick => {}
    }
}
