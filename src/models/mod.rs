//! Data models for map styles and map settings.
//!
//! Models are independent of the terminal UI.

pub mod app_settings;
pub mod catalog;
pub mod map_controller;
pub mod style_sheet;

pub use app_settings::AppSettings;
pub use catalog::{StyleCatalog, NO_COLOR_STYLE_NAME};
pub use map_controller::MapController;
pub use style_sheet::{StyleKind, StyleSheet};
