#![forbid(unsafe_code)]

//! Style values and themes for tagpick widgets.

pub mod select_theme;
mod style;

pub use select_theme::{SelectPresetId, SelectStyle};
pub use style::Style;
