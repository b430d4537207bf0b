//! Semantic style builders for the primer screen.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;
use crate::content::Accent;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Section heading style
pub fn heading() -> Style {
    Style::default()
        .fg(palette::HEADING)
        .add_modifier(Modifier::BOLD)
}

/// Caption above a labeled value
pub fn caption() -> Style {
    text_muted()
}

/// Value line of a labeled row; neutral primary when no accent is given
pub fn value(accent: Option<Accent>) -> Style {
    let color = match accent {
        Some(a) => accent_color(a),
        None => palette::TEXT_PRIMARY,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

// --- Accent resolution ---

/// Map a semantic accent slot to its terminal color
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Yellow => palette::ACCENT_YELLOW,
        Accent::Blue => palette::ACCENT_BLUE,
        Accent::Purple => palette::ACCENT_PURPLE,
    }
}

// --- Block builders ---

/// Rounded card border in the card's accent color
pub fn card_block(accent: Accent) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent_color(accent)))
}

/// Bordered block for the code panel
pub fn code_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette::BORDER_DIM))
}

/// Monospaced code text style
pub fn code_text() -> Style {
    Style::default().fg(palette::CODE_FG).bg(palette::CODE_BG)
}
