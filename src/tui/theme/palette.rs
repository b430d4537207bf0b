//! Color palette for the primer screen.

use ratatui::style::Color;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Chrome ---
pub const HEADING: Color = Color::Cyan;
pub const BORDER_DIM: Color = Color::DarkGray;
pub const KEY_HINT: Color = Color::Yellow;
pub const POSITION: Color = Color::Cyan;

// --- Card accents ---
pub const ACCENT_YELLOW: Color = Color::Yellow;
pub const ACCENT_BLUE: Color = Color::Blue;
pub const ACCENT_PURPLE: Color = Color::Magenta;

// --- Code panel ---
pub const CODE_FG: Color = Color::Gray;
pub const CODE_BG: Color = Color::Rgb(24, 26, 34);
