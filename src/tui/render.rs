//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use super::theme::icons::IconSet;
use super::{layout, widgets};
use crate::app::state::AppState;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function over constant content; the only
/// state it touches is the scroll tracking updated during render. The
/// same state always produces the same frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icon_mode);

    // Header with the screen title
    frame.render_widget(widgets::ScreenHeader::new(), areas.header);

    // Scrollable document body
    let content = widgets::ContentView::new(icons);
    frame.render_stateful_widget(content, areas.body, &mut state.content_view_state);

    // Status bar with scroll position and key hints
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

#[cfg(test)]
mod tests;
