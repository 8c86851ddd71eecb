//! Map style sheets and their tuning knobs.
//!
//! A style sheet is one of a fixed set of variants. Each variant carries its
//! own color list and level bounds; the per-instance state is the chosen
//! color and the two numeric levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color variants shared by Refill and its Zinc derivative.
const REFILL_COLORS: &[&str] = &[
    "black",
    "blue-gray",
    "blue",
    "brown-orange",
    "gray-gold",
    "gray",
    "high-contrast",
    "inconsolata",
    "pink-yellow",
    "pink",
    "purple-green",
    "sepia",
    "zinc",
];

/// Concrete style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleKind {
    /// Bright general purpose style
    BubbleWrap,
    /// Warm red style
    Cinnabar,
    /// Monochrome cartography style with color themes
    Refill,
    /// Outdoor style with hiking features
    Walkabout,
    /// Gray Refill derivative without selectable colors
    Zinc,
}

impl StyleKind {
    /// All variants in catalog order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BubbleWrap,
            Self::Cinnabar,
            Self::Refill,
            Self::Walkabout,
            Self::Zinc,
        ]
    }

    /// Human readable name, also used as the catalog key.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::BubbleWrap => "Bubble Wrap",
            Self::Cinnabar => "Cinnabar",
            Self::Refill => "Refill",
            Self::Walkabout => "Walkabout",
            Self::Zinc => "Zinc",
        }
    }

    /// Path of the scene file, relative to the style bundle root.
    #[must_use]
    pub const fn relative_path(&self) -> &'static str {
        match self {
            Self::BubbleWrap => "bubble-wrap/bubble-wrap-style.yaml",
            Self::Cinnabar => "cinnabar/cinnabar-style.yaml",
            Self::Refill => "refill/refill-style.yaml",
            Self::Walkabout => "walkabout/walkabout-style.yaml",
            Self::Zinc => "zinc/zinc-style.yaml",
        }
    }

    /// Selectable colors, possibly empty.
    #[must_use]
    pub const fn available_colors(&self) -> &'static [&'static str] {
        match self {
            Self::Refill | Self::Zinc => REFILL_COLORS,
            Self::BubbleWrap | Self::Cinnabar | Self::Walkabout => &[],
        }
    }

    /// Number of detail levels (0 means the knob does not apply).
    #[must_use]
    pub const fn available_detail_levels(&self) -> i64 {
        match self {
            Self::Refill | Self::Zinc => 11,
            Self::BubbleWrap | Self::Cinnabar | Self::Walkabout => 0,
        }
    }

    /// Number of label density levels (0 means the knob does not apply).
    #[must_use]
    pub const fn available_label_levels(&self) -> i64 {
        12
    }

    /// Color a freshly constructed sheet starts with.
    #[must_use]
    pub const fn default_color(&self) -> &'static str {
        match self {
            Self::Refill => "black",
            Self::Zinc => "zinc",
            Self::BubbleWrap | Self::Cinnabar | Self::Walkabout => "",
        }
    }

    /// Detail level a freshly constructed sheet starts with.
    #[must_use]
    pub const fn default_detail_level(&self) -> i64 {
        match self {
            Self::Refill | Self::Zinc => 10,
            Self::BubbleWrap | Self::Cinnabar | Self::Walkabout => 0,
        }
    }

    /// Label level a freshly constructed sheet starts with.
    #[must_use]
    pub const fn default_label_level(&self) -> i64 {
        5
    }

    /// Looks up a variant by its display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.display_name() == name)
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A map style sheet with its mutable color and level settings.
///
/// Two sheets are equal when they point at the same scene file, regardless
/// of their current color or levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Style variant
    #[serde(rename = "variant")]
    kind: StyleKind,
    /// Chosen color variant (empty when the style has none)
    #[serde(default)]
    pub current_color: String,
    /// Level of detail
    #[serde(default)]
    pub detail_level: i64,
    /// Label density
    #[serde(default)]
    pub label_level: i64,
}

impl StyleSheet {
    /// Creates a sheet for `kind` with its default color and levels.
    #[must_use]
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            current_color: kind.default_color().to_string(),
            detail_level: kind.default_detail_level(),
            label_level: kind.default_label_level(),
        }
    }

    /// Returns the style variant.
    #[must_use]
    pub const fn kind(&self) -> StyleKind {
        self.kind
    }

    /// Identity used for equality.
    #[must_use]
    pub const fn relative_path(&self) -> &'static str {
        self.kind.relative_path()
    }

    /// Selectable colors for this sheet.
    #[must_use]
    pub const fn available_colors(&self) -> &'static [&'static str] {
        self.kind.available_colors()
    }

    /// Number of detail levels, 0 when not applicable.
    #[must_use]
    pub const fn available_detail_levels(&self) -> i64 {
        self.kind.available_detail_levels()
    }

    /// Number of label levels, 0 when not applicable.
    #[must_use]
    pub const fn available_label_levels(&self) -> i64 {
        self.kind.available_label_levels()
    }

    /// Whether `color` is empty or one of this sheet's colors.
    #[must_use]
    pub fn accepts_color(&self, color: &str) -> bool {
        color.is_empty() || self.available_colors().contains(&color)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new(StyleKind::BubbleWrap)
    }
}

impl PartialEq for StyleSheet {
    fn eq(&self, other: &Self) -> bool {
        self.relative_path() == other.relative_path()
    }
}

impl Eq for StyleSheet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_settings() {
        let mut a = StyleSheet::new(StyleKind::Refill);
        let b = StyleSheet::new(StyleKind::Refill);
        a.current_color = "sepia".to_string();
        a.detail_level = 3;
        assert_eq!(a, b);
        assert_ne!(a, StyleSheet::new(StyleKind::Zinc));
    }

    #[test]
    fn test_relative_paths_unique() {
        let mut paths: Vec<_> = StyleKind::all().iter().map(StyleKind::relative_path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), StyleKind::all().len());
    }

    #[test]
    fn test_zinc_inherits_refill_colors() {
        let zinc = StyleSheet::new(StyleKind::Zinc);
        assert_eq!(zinc.available_colors(), StyleKind::Refill.available_colors());
        assert_eq!(zinc.current_color, "zinc");
    }

    #[test]
    fn test_defaults_are_accepted() {
        for kind in StyleKind::all() {
            let sheet = StyleSheet::new(*kind);
            assert!(sheet.accepts_color(&sheet.current_color), "{kind}");
            assert!(sheet.label_level <= sheet.available_label_levels());
        }
    }

    #[test]
    fn test_from_display_name() {
        assert_eq!(StyleKind::from_display_name("Bubble Wrap"), Some(StyleKind::BubbleWrap));
        assert_eq!(StyleKind::from_display_name("Zinc"), Some(StyleKind::Zinc));
        assert_eq!(StyleKind::from_display_name("Tron"), None);
    }

    #[test]
    fn test_accepts_color() {
        let refill = StyleSheet::new(StyleKind::Refill);
        assert!(refill.accepts_color("sepia"));
        assert!(refill.accepts_color(""));
        assert!(!refill.accepts_color("chartreuse"));

        let cinnabar = StyleSheet::new(StyleKind::Cinnabar);
        assert!(!cinnabar.accepts_color("black"));
    }
}
