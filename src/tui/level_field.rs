//! Editable text field holding a numeric style level.

use crate::constants::NOT_APPLICABLE;

/// Maximum characters accepted by a level field.
const MAX_LEN: usize = 6;

/// Text field for a detail or label level.
///
/// The text is kept as typed; it is only parsed when the screen saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelField {
    /// Current text
    pub text: String,
    /// Whether the field accepts input
    pub enabled: bool,
}

impl LevelField {
    /// Editable field showing `level`.
    #[must_use]
    pub fn editable(level: i64) -> Self {
        Self {
            text: level.to_string(),
            enabled: true,
        }
    }

    /// Disabled placeholder field.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self {
            text: NOT_APPLICABLE.to_string(),
            enabled: false,
        }
    }

    /// Field for a level with `available` valid values.
    #[must_use]
    pub fn for_level(available: i64, level: i64) -> Self {
        if available > 0 {
            Self::editable(level)
        } else {
            Self::not_applicable()
        }
    }

    /// Append a typed character
    pub fn push_char(&mut self, c: char) {
        if self.enabled && !c.is_control() && self.text.chars().count() < MAX_LEN {
            self.text.push(c);
        }
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        if self.enabled {
            self.text.pop();
        }
    }
}

impl Default for LevelField {
    fn default() -> Self {
        Self::not_applicable()
    }
}
