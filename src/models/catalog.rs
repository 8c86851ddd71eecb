//! The fixed set of styles offered by the picker.

use super::style_sheet::{StyleKind, StyleSheet};

/// Display name of the style whose color list is never offered.
pub const NO_COLOR_STYLE_NAME: &str = "Zinc";

/// Ordered mapping from display name to style sheet.
///
/// Row order in the style picker follows insertion order.
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    entries: Vec<(String, StyleSheet)>,
}

impl StyleCatalog {
    /// Builds the catalog with one fresh sheet per style variant.
    #[must_use]
    pub fn new() -> Self {
        let entries = StyleKind::all()
            .iter()
            .map(|kind| (kind.display_name().to_string(), StyleSheet::new(*kind)))
            .collect();
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name at `row`.
    #[must_use]
    pub fn name_at(&self, row: usize) -> Option<&str> {
        self.entries.get(row).map(|(name, _)| name.as_str())
    }

    /// Iterates over display names in row order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over style sheets in row order.
    pub fn styles(&self) -> impl Iterator<Item = &StyleSheet> {
        self.entries.iter().map(|(_, style)| style)
    }

    /// Row index of the entry named `name`.
    #[must_use]
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Row index of the entry with the same identity as `style`.
    #[must_use]
    pub fn index_of_style(&self, style: &StyleSheet) -> Option<usize> {
        self.entries
            .iter()
            .position(|(_, s)| s.relative_path() == style.relative_path())
    }

    /// Sheet at `row`.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&StyleSheet> {
        self.entries.get(row).map(|(_, style)| style)
    }

    /// Mutable sheet at `row`.
    pub fn get_mut(&mut self, row: usize) -> Option<&mut StyleSheet> {
        self.entries.get_mut(row).map(|(_, style)| style)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let catalog = StyleCatalog::new();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(
            names,
            vec!["Bubble Wrap", "Cinnabar", "Refill", "Walkabout", "Zinc"]
        );
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = StyleCatalog::new();
        assert_eq!(catalog.index_of_name("Refill"), Some(2));
        assert_eq!(catalog.index_of_name("Nope"), None);
        assert_eq!(catalog.name_at(4), Some(NO_COLOR_STYLE_NAME));
        assert_eq!(catalog.name_at(5), None);
    }

    #[test]
    fn test_lookup_by_identity() {
        let catalog = StyleCatalog::new();
        let mut loaded = StyleSheet::new(StyleKind::Cinnabar);
        loaded.label_level = 0;
        assert_eq!(catalog.index_of_style(&loaded), Some(1));
    }

    #[test]
    fn test_get_mut_edits_entry() {
        let mut catalog = StyleCatalog::new();
        if let Some(style) = catalog.get_mut(2) {
            style.current_color = "pink".to_string();
        }
        assert_eq!(catalog.get(2).map(|s| s.current_color.as_str()), Some("pink"));
    }
}
