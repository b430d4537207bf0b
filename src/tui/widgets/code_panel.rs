//! Bordered pseudo-code display panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Padding, Paragraph, Widget},
};

use crate::tui::theme::styles;

/// Panel title shown in the border
const TITLE: &str = " Conceptual Φ Calculation ";

/// A bordered, padded block displaying a fixed string verbatim.
///
/// The content is never parsed or highlighted; it is documentation text.
pub struct CodePanel<'a> {
    content: &'a str,
}

impl<'a> CodePanel<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// The displayed string, unmodified
    pub fn content(&self) -> &str {
        self.content
    }

    /// Panel height: one row per content line plus the borders
    pub fn height(&self) -> u16 {
        self.content.lines().count() as u16 + 2
    }
}

impl Widget for CodePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::code_block(TITLE).padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self.content.lines().map(Line::from).collect();
        Paragraph::new(lines)
            .style(styles::code_text())
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PHI_PSEUDOCODE;
    use crate::tui::test_utils::TestTerminal;

    #[test]
    fn test_content_is_verbatim() {
        let panel = CodePanel::new(PHI_PSEUDOCODE);
        assert_eq!(panel.content(), PHI_PSEUDOCODE);
    }

    #[test]
    fn test_height_covers_all_lines() {
        let panel = CodePanel::new(PHI_PSEUDOCODE);
        assert_eq!(
            panel.height(),
            PHI_PSEUDOCODE.lines().count() as u16 + 2
        );
    }

    #[test]
    fn test_renders_every_line() {
        let panel = CodePanel::new(PHI_PSEUDOCODE);
        let height = panel.height();
        let mut term = TestTerminal::with_size(80, height);
        term.render_widget(panel, term.area());

        for line in PHI_PSEUDOCODE.lines() {
            assert!(term.buffer_contains(line), "missing line: {line}");
        }
    }

    #[test]
    fn test_title_in_border() {
        let mut term = TestTerminal::with_size(80, 6);
        term.render_widget(CodePanel::new("one\ntwo"), term.area());
        assert!(term.line_contains(0, "Conceptual Φ Calculation"));
    }
}
