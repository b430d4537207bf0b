//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event emitted when event polling times out
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll up by the configured step
    ScrollUp,
    /// Scroll down by the configured step
    ScrollDown,
    /// Scroll to top of the document
    ScrollToTop,
    /// Scroll to bottom of the document
    ScrollToBottom,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
}
