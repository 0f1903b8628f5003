mod gif_pane;
mod input;
mod selection_pills;
mod status_bar;

pub use gif_pane::GifPane;
pub use input::TextInput;
pub use selection_pills::SelectionPills;
pub use status_bar::{StatusBar, StatusLevel};
