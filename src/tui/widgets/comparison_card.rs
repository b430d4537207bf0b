//! Comparison card widgets
//!
//! `ComparisonCard` renders one example system; `ComparisonRow` lays the
//! three cards side by side, stacking them vertically when the terminal
//! is too narrow.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::LabeledRow;
use crate::content::SystemCard;
use crate::tui::theme::{icons::IconSet, styles};

/// Height of one card, borders included
pub const CARD_HEIGHT: u16 = 10;

/// Minimum width for the side-by-side card layout
pub const MIN_WIDE_WIDTH: u16 = 78;

/// One example system: accent-bordered block with icon, title, and the
/// three labeled rows in fixed order.
pub struct ComparisonCard<'a> {
    card: &'a SystemCard,
    icons: IconSet,
}

impl<'a> ComparisonCard<'a> {
    pub fn new(card: &'a SystemCard, icons: IconSet) -> Self {
        Self { card, icons }
    }
}

impl Widget for ComparisonCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.card.accent);
        let inner = block.inner(area);
        block.render(area, buf);

        let title_style = Style::default()
            .fg(styles::accent_color(self.card.accent))
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::with_capacity(8);
        lines.push(
            Line::from(vec![
                Span::raw(format!("{} ", self.icons.resolve(self.card.icon))),
                Span::styled(self.card.title, title_style),
            ])
            .centered(),
        );
        lines.push(Line::from(""));
        for row in self.card.rows() {
            lines.extend(LabeledRow::from_data(&row).lines());
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// The three-card comparison row
pub struct ComparisonRow<'a> {
    cards: &'a [SystemCard; 3],
    icons: IconSet,
}

impl<'a> ComparisonRow<'a> {
    pub fn new(cards: &'a [SystemCard; 3], icons: IconSet) -> Self {
        Self { cards, icons }
    }

    /// Row height for a given terminal width
    pub fn height(width: u16) -> u16 {
        if width >= MIN_WIDE_WIDTH {
            CARD_HEIGHT
        } else {
            CARD_HEIGHT * 3
        }
    }
}

impl Widget for ComparisonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas: Vec<Rect> = if area.width >= MIN_WIDE_WIDTH {
            Layout::horizontal([Constraint::Ratio(1, 3); 3])
                .split(area)
                .to_vec()
        } else {
            Layout::vertical([Constraint::Length(CARD_HEIGHT); 3])
                .split(area)
                .to_vec()
        };

        for (card, slot) in self.cards.iter().zip(areas) {
            ComparisonCard::new(card, self.icons).render(slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use crate::content::comparison_cards;
    use crate::tui::test_utils::TestTerminal;
    use crate::tui::theme::palette;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Ascii)
    }

    #[test]
    fn test_card_shows_title_and_rows() {
        let cards = comparison_cards();
        let mut term = TestTerminal::with_size(30, CARD_HEIGHT);
        term.render_widget(ComparisonCard::new(&cards[0], icons()), term.area());

        assert!(term.buffer_contains("Photodiode"));
        assert!(term.buffer_contains("Differentiation"));
        assert!(term.buffer_contains("Integration"));
        assert!(term.buffer_contains("Φ value"));
        assert!(term.buffer_contains("Φ ≈ 0"));
    }

    #[test]
    fn test_card_rows_in_fixed_order() {
        let cards = comparison_cards();
        let mut term = TestTerminal::with_size(30, CARD_HEIGHT);
        term.render_widget(ComparisonCard::new(&cards[2], icons()), term.area());

        let content = term.content();
        let differentiation = content.find("Differentiation").unwrap();
        let integration = content.find("Integration").unwrap();
        let phi = content.find("Φ value").unwrap();
        assert!(differentiation < integration);
        assert!(integration < phi);
    }

    #[test]
    fn test_brain_card_has_purple_border() {
        let cards = comparison_cards();
        let mut term = TestTerminal::with_size(30, CARD_HEIGHT);
        term.render_widget(ComparisonCard::new(&cards[2], icons()), term.area());

        let corner_style = term.buffer()[(0, 0)].style();
        assert_eq!(corner_style.fg, Some(palette::ACCENT_PURPLE));
    }

    #[test]
    fn test_row_renders_three_cards_side_by_side() {
        let cards = comparison_cards();
        let mut term = TestTerminal::with_size(80, CARD_HEIGHT);
        term.render_widget(ComparisonRow::new(&cards, icons()), term.area());

        // All three titles on the same line
        assert!(term.line_contains(1, "Photodiode"));
        assert!(term.line_contains(1, "Camera Sensor"));
        assert!(term.line_contains(1, "Brain"));
    }

    #[test]
    fn test_row_stacks_below_min_width() {
        let cards = comparison_cards();
        let mut term = TestTerminal::with_size(40, CARD_HEIGHT * 3);
        term.render_widget(ComparisonRow::new(&cards, icons()), term.area());

        let content = term.content();
        let photodiode = content.find("Photodiode").unwrap();
        let camera = content.find("Camera Sensor").unwrap();
        let brain = content.find("Brain").unwrap();
        assert!(photodiode < camera);
        assert!(camera < brain);
    }

    #[test]
    fn test_height_matches_layout() {
        assert_eq!(ComparisonRow::height(80), CARD_HEIGHT);
        assert_eq!(ComparisonRow::height(40), CARD_HEIGHT * 3);
    }
}
