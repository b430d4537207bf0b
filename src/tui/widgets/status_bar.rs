//! Status bar widget
//!
//! Displays the scroll position and the key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::state::AppState;
use crate::tui::theme::{palette, styles};

/// Status bar widget showing scroll position and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Visible line range, e.g. "1-24/66"
    fn position(&self) -> String {
        let view = &self.state.content_view_state;
        if view.total_lines == 0 {
            "0/0".to_string()
        } else {
            let first = view.offset + 1;
            let last = (view.offset + view.visible_lines).min(view.total_lines);
            format!("{}-{}/{}", first, last, view.total_lines)
        }
    }

    /// One "[key] label" hint as styled spans
    fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 3] {
        [
            Span::styled("[", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled(format!("] {}  ", label), styles::text_muted()),
        ]
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::BORDER_DIM));

        let mut segments = Vec::new();
        segments.push(Span::styled(
            format!(" {}", self.position()),
            Style::default().fg(palette::POSITION),
        ));
        segments.push(separator);
        segments.extend(Self::key_hint("j/k", "Scroll"));
        segments.extend(Self::key_hint("g/G", "Top/Bottom"));
        segments.extend(Self::key_hint("q", "Quit"));
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = Line::from(self.build_segments());

        Paragraph::new(content)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
