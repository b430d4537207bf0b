//! Icon set for the primer screen.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — emoji glyphs matching the card subjects
//! - `IconMode::Ascii` — plain ASCII fallbacks, safe in any terminal

use crate::config::IconMode;
use crate::content::Icon;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate glyph for each icon
/// slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Resolve a content icon slot to a glyph
    pub fn resolve(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Photodiode => self.photodiode(),
            Icon::Camera => self.camera(),
            Icon::Brain => self.brain(),
        }
    }

    pub fn photodiode(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "💡",
            IconMode::Ascii => "[o]",
        }
    }

    pub fn camera(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "📷",
            IconMode::Ascii => "[=]",
        }
    }

    pub fn brain(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "🧠",
            IconMode::Ascii => "[~]",
        }
    }
}
