//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Map Style Picker";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mapstyle";

/// Placeholder shown for knobs a style doesn't support.
pub const NOT_APPLICABLE: &str = "N/A";

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "mapstyle.log";
