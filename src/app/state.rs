//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::tui::widgets::ContentViewState;

/// Current application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Viewing,
    Quitting,
}

/// Complete application state (the Model in TEA)
///
/// The displayed content is constant; the only mutable state is the
/// scroll position and the quit flag.
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Document scroll state
    pub content_view_state: ContentViewState,

    /// Loaded settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Viewing,
            content_view_state: ContentViewState::new(),
            settings,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
