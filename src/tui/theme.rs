//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) unless the config forces one.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Highlights, selections, and focus states
    pub accent: Color,
    /// Enabled switches and saved values
    pub success: Color,

    /// Primary text content color
    pub text: Color,
    /// Help text and disabled fields
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for highlighted rows
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the theme for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
