//! Overlay flags of the live map.

use serde::{Deserialize, Serialize};

/// Overlay layers drawn on top of the map style.
///
/// Writes take effect immediately. The bike and walking overlays are kept
/// mutually exclusive by the style screen, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapController {
    /// Public transit lines
    #[serde(default)]
    pub show_transit_overlay: bool,
    /// Bike routes
    #[serde(default)]
    pub show_bike_overlay: bool,
    /// Walking paths
    #[serde(default)]
    pub show_walking_path_overlay: bool,
}

impl MapController {
    /// Creates a controller with all overlays hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_transit_overlay: false,
            show_bike_overlay: false,
            show_walking_path_overlay: false,
        }
    }

    /// Whether both path overlays are on at once.
    #[must_use]
    pub const fn has_conflicting_paths(&self) -> bool {
        self.show_bike_overlay && self.show_walking_path_overlay
    }
}
