//! `show` command: print the stored map settings.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::constants::NOT_APPLICABLE;

/// Display the stored style and overlays
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON-serializable settings for output
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct SettingsOutput {
    style: StyleOutput,
    overlays: OverlaysOutput,
    theme: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct StyleOutput {
    name: String,
    relative_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_level: Option<i64>,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct OverlaysOutput {
    transit: bool,
    bike: bool,
    walking: bool,
}

impl SettingsOutput {
    /// Summarizes `config`, leaving out knobs the style doesn't support.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let style = &config.style;
        Self {
            style: StyleOutput {
                name: style.kind().display_name().to_string(),
                relative_path: style.relative_path().to_string(),
                color: (!style.current_color.is_empty()).then(|| style.current_color.clone()),
                detail_level: (style.available_detail_levels() > 0).then_some(style.detail_level),
                label_level: (style.available_label_levels() > 0).then_some(style.label_level),
            },
            overlays: OverlaysOutput {
                transit: config.overlays.show_transit_overlay,
                bike: config.overlays.show_bike_overlay,
                walking: config.overlays.show_walking_path_overlay,
            },
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
        }
    }
}

impl ShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: &Path) -> Result<()> {
        let config = Config::load_from(config_path).context("Failed to load configuration")?;
        let output = SettingsOutput::from_config(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .context("Failed to serialize settings to JSON")?;
            println!("{}", json);
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn output_human_readable(output: &SettingsOutput) {
    let style = &output.style;
    let level = |value: Option<i64>| value.map_or(NOT_APPLICABLE.to_string(), |v| v.to_string());

    println!("Style");
    println!("  Name:            {}", style.name);
    println!("  Scene file:      {}", style.relative_path);
    println!(
        "  Color:           {}",
        style.color.as_deref().unwrap_or(NOT_APPLICABLE)
    );
    println!("  Level of detail: {}", level(style.detail_level));
    println!("  Label density:   {}", level(style.label_level));
    println!();
    println!("Overlays");
    println!("  Transit:         {}", on_off(output.overlays.transit));
    println!("  Bike:            {}", on_off(output.overlays.bike));
    println!("  Walking:         {}", on_off(output.overlays.walking));
    println!();
    println!("Theme:             {}", output.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StyleKind, StyleSheet};

    #[test]
    fn test_output_omits_unsupported_knobs() {
        let mut config = Config::new();
        config.style = StyleSheet::new(StyleKind::Cinnabar);
        let output = SettingsOutput::from_config(&config);

        assert_eq!(output.style.name, "Cinnabar");
        assert_eq!(output.style.color, None);
        assert_eq!(output.style.detail_level, None);
        assert_eq!(output.style.label_level, Some(5));
        assert_eq!(output.theme, "auto");
    }

    #[test]
    fn test_json_shape() {
        let mut config = Config::new();
        config.style = StyleSheet::new(StyleKind::Refill);
        config.overlays.show_bike_overlay = true;

        let json = serde_json::to_value(SettingsOutput::from_config(&config)).unwrap();
        assert_eq!(json["style"]["color"], "black");
        assert_eq!(json["style"]["detail_level"], 10);
        assert_eq!(json["overlays"]["bike"], true);
        assert_eq!(json["overlays"]["walking"], false);
    }
}
