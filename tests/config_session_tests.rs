#![allow(missing_docs)]
//! A full visit to the style screen against a settings file on disk.

use mapstyle::app::{open_session, store_session};
use mapstyle::config::{Config, ThemeMode};
use mapstyle::models::StyleKind;
use mapstyle::tui::LevelKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_saved_session_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::load_from(&path).unwrap();
    let (mut context, mut screen) = open_session(&config);

    let refill = screen.catalog().index_of_name("Refill").unwrap();
    screen.select_style_row(refill);
    screen.select_color_row(11);
    screen.set_level_text(LevelKind::Detail, "4");
    screen.bike_overlay_switch_changed(true, &mut context.map_controller);
    screen.save(&mut context.app_settings);

    store_session(&mut config, context);
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.style.kind(), StyleKind::Refill);
    assert_eq!(reloaded.style.current_color, "sepia");
    assert_eq!(reloaded.style.detail_level, 4);
    assert!(reloaded.overlays.show_bike_overlay);

    let (_, reopened) = open_session(&reloaded);
    assert_eq!(reopened.selected_style_row(), refill);
    assert_eq!(reopened.color_row_title(reopened.selected_color_row()), "sepia");
}

#[test]
fn test_cancelled_session_keeps_stored_style() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[style]\nvariant = \"Cinnabar\"\nlabel_level = 3\n\n[ui]\ntheme_mode = \"Dark\"\n",
    )
    .unwrap();

    let mut config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
    let (mut context, mut screen) = open_session(&config);

    screen.select_style_row(screen.catalog().index_of_name("Zinc").unwrap());
    screen.set_level_text(LevelKind::Label, "9");
    screen.walking_overlay_switch_changed(true, &mut context.map_controller);
    screen.cancel();

    store_session(&mut config, context);
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.style.kind(), StyleKind::Cinnabar);
    assert_eq!(reloaded.style.label_level, 3);
    assert!(reloaded.overlays.show_walking_path_overlay);
    assert_eq!(reloaded.ui.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_conflicting_overlays_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[overlays]\nshow_bike_overlay = true\nshow_walking_path_overlay = true\n",
    )
    .unwrap();

    assert!(Config::load_from(&path).is_err());
}
