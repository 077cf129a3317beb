//! Egui widgets for [globe_measure].

mod messenger;
mod toolbar;

pub use messenger::EguiMessenger;
pub use toolbar::{MeasureToolbar, ToolbarAction};
