//! Application-wide map settings.

use serde::{Deserialize, Serialize};

use super::StyleSheet;

/// Settings that outlive a single visit to the style screen.
///
/// The style screen reads `selected_style` when it opens and overwrites it
/// only when the user saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Style the map is drawn with
    pub selected_style: StyleSheet,
}

impl AppSettings {
    /// Creates settings with the given style.
    #[must_use]
    pub const fn new(selected_style: StyleSheet) -> Self {
        Self { selected_style }
    }
}
