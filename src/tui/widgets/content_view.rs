//! Scrollable document body
//!
//! Composes the explanation sections, the comparison row, the code panel,
//! and the references into one fixed-height document, then shows the
//! window selected by the scroll offset. The document itself is constant;
//! only the offset changes between frames.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use super::{references, CodePanel, ComparisonRow, References};
use crate::content::{self, Section};
use crate::tui::theme::{icons::IconSet, styles};

/// State for document scrolling
#[derive(Debug, Default)]
pub struct ContentViewState {
    /// Current scroll offset from the top of the document
    pub offset: usize,
    /// Total document lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll to the top of the document
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll to the bottom of the document
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page up, keeping two lines of context
    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_up(page);
    }

    /// Page down, keeping two lines of context
    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }
}

/// Document segments in display order
#[derive(Debug, Clone, Copy)]
enum Segment {
    Text(&'static Section),
    Cards,
    Code,
    References,
    Blank,
}

/// The scrollable document widget
pub struct ContentView {
    icons: IconSet,
}

impl ContentView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn segments() -> [Segment; 9] {
        [
            Segment::Text(&content::INTRO),
            Segment::Text(&content::MECHANISMS),
            Segment::Text(&content::COMPARISON),
            Segment::Cards,
            Segment::Blank,
            Segment::Text(&content::CODE_LEAD),
            Segment::Code,
            Segment::Blank,
            Segment::References,
        ]
    }

    fn segment_height(segment: Segment, width: u16) -> u16 {
        match segment {
            // Heading, body lines, one trailing blank
            Segment::Text(section) => section.lines.len() as u16 + 2,
            Segment::Cards => ComparisonRow::height(width),
            Segment::Code => CodePanel::new(content::PHI_PSEUDOCODE).height(),
            Segment::References => references::HEIGHT,
            Segment::Blank => 1,
        }
    }

    /// Full document height for a given terminal width
    pub fn content_height(width: u16) -> u16 {
        Self::segments()
            .into_iter()
            .map(|segment| Self::segment_height(segment, width))
            .sum()
    }

    fn render_section(section: &Section, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(section.lines.len() + 1);
        lines.push(Line::from(Span::styled(section.heading, styles::heading())));
        for line in section.lines {
            lines.push(Line::from(Span::styled(*line, styles::text_secondary())));
        }
        Paragraph::new(lines).render(area, buf);
    }
}

impl StatefulWidget for ContentView {
    type State = ContentViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let total = Self::content_height(area.width);
        state.update_content_size(total as usize, area.height as usize);

        // Compose the whole document off-screen, then blit the visible
        // window into the frame buffer.
        let mut document = Buffer::empty(Rect::new(0, 0, area.width, total));
        let cards = content::comparison_cards();

        let mut y = 0;
        for segment in Self::segments() {
            let height = Self::segment_height(segment, area.width);
            let slot = Rect::new(0, y, area.width, height);
            match segment {
                Segment::Text(section) => Self::render_section(section, slot, &mut document),
                Segment::Cards => {
                    ComparisonRow::new(&cards, self.icons).render(slot, &mut document)
                }
                Segment::Code => {
                    CodePanel::new(content::PHI_PSEUDOCODE).render(slot, &mut document)
                }
                Segment::References => {
                    References::new(&content::REFERENCES).render(slot, &mut document)
                }
                Segment::Blank => {}
            }
            y += height;
        }

        let offset = state.offset as u16;
        let visible = area.height.min(total.saturating_sub(offset));
        for dy in 0..visible {
            for x in 0..area.width {
                buf[(area.x + x, area.y + dy)] = document[(x, offset + dy)].clone();
            }
        }

        // Scrollbar when the document exceeds the viewport
        if state.total_lines > state.visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state =
                ScrollbarState::new(state.total_lines).position(state.offset);

            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}
