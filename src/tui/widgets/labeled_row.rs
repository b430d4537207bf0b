//! Caption/value row widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::content::{Accent, RowData};
use crate::tui::theme::styles;

/// A two-line block: a muted caption above a bold value.
///
/// The value renders in the given accent color, or the neutral primary
/// color when no accent is set.
pub struct LabeledRow<'a> {
    label: &'a str,
    value: &'a str,
    accent: Option<Accent>,
}

impl<'a> LabeledRow<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            accent: None,
        }
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn from_data(data: &'a RowData) -> Self {
        Self {
            label: data.label,
            value: data.value,
            accent: data.accent,
        }
    }

    /// The row as two styled lines, for embedding in a larger block
    pub fn lines(&self) -> [Line<'static>; 2] {
        [
            Line::from(Span::styled(self.label.to_string(), styles::caption())),
            Line::from(Span::styled(
                self.value.to_string(),
                styles::value(self.accent),
            )),
        ]
    }
}

impl Widget for LabeledRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines().to_vec()).render(area, buf);
    }
}
