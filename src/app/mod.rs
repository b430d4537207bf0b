//! Application layer - state management and entry point

pub mod handler;
pub mod message;
pub mod signals;
pub mod state;

pub use message::Message;
pub use state::{AppPhase, AppState};

use crate::common::prelude::*;
use crate::config::{self, IconMode};
use crate::tui;

/// Options resolved from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Force ASCII icons regardless of configuration
    pub ascii: bool,
    /// Write a default config file and exit
    pub init_config: bool,
}

/// Main application entry point
///
/// Installs error handling, initializes logging, loads settings, and runs
/// the TUI until the user quits.
pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    if options.init_config {
        let dir = config::config_dir()
            .ok_or_else(|| Error::config("no user config directory on this platform"))?;
        let path = config::init_config_dir(&dir)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    // Initialize logging (to file, since the TUI owns stdout)
    crate::common::logging::init()?;

    info!("phi-primer starting");

    let mut settings = config::load_settings();
    if options.ascii {
        settings.ui.icon_mode = IconMode::Ascii;
    }
    info!("Icon mode: {}", settings.ui.icon_mode);

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("phi-primer exiting");
    result
}
