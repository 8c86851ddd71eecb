use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::tui::{self, StyleScreenContext, StyleScreenEvent, StyleSelectionScreen};

/// Runs the style screen over already-loaded settings and writes the outcome
/// to `config_path`.
pub fn run_style_picker_terminal(
    mut config: Config,
    config_path: &Path,
) -> Result<StyleScreenEvent> {
    info!(path = %config_path.display(), style = %config.style.kind(), "opening style screen");

    let (mut context, mut screen) = open_session(&config);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_style_screen(
        &mut screen,
        &mut context,
        config.ui.theme_mode,
        &mut terminal,
    );
    tui::restore_terminal(terminal)?;
    let event = result?;

    store_session(&mut config, context);
    config.save_to(config_path)?;
    info!(?event, "settings written");

    Ok(event)
}

/// Builds the screen context and screen from the stored settings.
#[must_use]
pub fn open_session(config: &Config) -> (StyleScreenContext, StyleSelectionScreen) {
    let context = StyleScreenContext::new(config.overlays, config.app_settings());
    let screen = StyleSelectionScreen::new(&context);
    (context, screen)
}

/// Copies the screen's live state back into the config.
///
/// Overlay flags always carry over since the screen applies them as they
/// change; the style only differs from the stored one after a save.
pub fn store_session(config: &mut Config, context: StyleScreenContext) {
    config.overlays = context.map_controller;
    config.set_app_settings(context.app_settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StyleKind, StyleSheet};

    #[test]
    fn test_open_session_reflects_loaded_config() {
        let mut config = Config::new();
        config.style = StyleSheet::new(StyleKind::Walkabout);
        config.overlays.show_bike_overlay = true;

        let (context, screen) = open_session(&config);
        assert!(context.map_controller.show_bike_overlay);
        assert_eq!(
            screen.selected_style_row(),
            screen.catalog().index_of_name("Walkabout").unwrap()
        );
    }

    #[test]
    fn test_store_session_keeps_overlays_after_cancel() {
        let mut config = Config::new();
        let (mut context, mut screen) = open_session(&config);

        screen.transit_overlay_switch_changed(true, &mut context.map_controller);
        screen.select_style_row(2);
        screen.cancel();

        store_session(&mut config, context);
        assert!(config.overlays.show_transit_overlay);
        assert_eq!(config.style.kind(), StyleKind::BubbleWrap);
    }

    #[test]
    fn test_store_session_after_save() {
        let mut config = Config::new();
        let (mut context, mut screen) = open_session(&config);

        screen.select_style_row(4);
        screen.save(&mut context.app_settings);

        store_session(&mut config, context);
        assert_eq!(config.style, StyleSheet::new(StyleKind::Zinc));
    }
}
