//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header (1 for content + 1 for border)
        Constraint::Min(5),    // Document body
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_full_area() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.status.height, 2);
        assert_eq!(areas.body.height, 20);
        assert_eq!(
            areas.header.height + areas.body.height + areas.status.height,
            area.height
        );
    }

    #[test]
    fn test_body_gets_remaining_space() {
        let area = Rect::new(0, 0, 120, 50);
        let areas = create(area);
        assert_eq!(areas.body.height, 46);
    }
}
