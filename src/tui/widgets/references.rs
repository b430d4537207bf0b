//! References block widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::tui::theme::styles;

/// Fixed block height; generous enough for both citations wrapped at
/// narrow terminal widths.
pub const HEIGHT: u16 = 14;

/// The attribution block: a heading and the citations, wrapped to the
/// available width.
pub struct References<'a> {
    citations: &'a [&'static str],
}

impl<'a> References<'a> {
    pub fn new(citations: &'a [&'static str]) -> Self {
        Self { citations }
    }
}

impl Widget for References<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.citations.len() * 2 + 2);
        lines.push(Line::from(Span::styled("References", styles::heading())));
        lines.push(Line::from(""));
        for (i, citation) in self.citations.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(*citation, styles::text_muted())));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
