//! Custom widget components

mod code_panel;
mod comparison_card;
mod content_view;
mod header;
mod labeled_row;
mod references;
mod status_bar;

pub use code_panel::CodePanel;
pub use comparison_card::{ComparisonCard, ComparisonRow, CARD_HEIGHT, MIN_WIDE_WIDTH};
pub use content_view::{ContentView, ContentViewState};
pub use header::ScreenHeader;
pub use labeled_row::LabeledRow;
pub use references::References;
pub use status_bar::StatusBar;
