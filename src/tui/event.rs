//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event};

use crate::app::message::Message;
use crate::common::prelude::*;

/// Poll for terminal events with timeout
///
/// Only key presses become messages; repeats and releases are dropped so
/// terminals that report them don't double-scroll.
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(Some(Message::Key(key)))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}
