//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::content;
use crate::tui::theme::styles;

/// Header widget displaying the screen title and the quit hint
pub struct ScreenHeader;

impl ScreenHeader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScreenHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScreenHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = Line::from(vec![
            Span::styled(format!(" {}", content::SCREEN_TITLE), styles::heading()),
            Span::raw("   "),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
