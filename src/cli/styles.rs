//! `styles` command: list the styles the picker offers.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::constants::NOT_APPLICABLE;
use crate::models::StyleCatalog;

/// List the available map styles
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One catalog entry for output
#[derive(Serialize, Debug)]
pub struct StyleEntry {
    /// Display name
    pub name: String,
    /// Scene file relative path
    pub relative_path: String,
    /// Selectable colors
    pub colors: Vec<String>,
    /// Number of detail levels
    pub detail_levels: i64,
    /// Number of label levels
    pub label_levels: i64,
}

/// Lists every catalog entry in picker order.
#[must_use]
pub fn catalog_entries() -> Vec<StyleEntry> {
    let catalog = StyleCatalog::new();
    catalog
        .names()
        .zip(catalog.styles())
        .map(|(name, style)| StyleEntry {
            name: name.to_string(),
            relative_path: style.relative_path().to_string(),
            colors: style
                .available_colors()
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            detail_levels: style.available_detail_levels(),
            label_levels: style.available_label_levels(),
        })
        .collect()
}

impl StylesArgs {
    /// Execute styles command
    pub fn execute(&self) -> Result<()> {
        let entries = catalog_entries();

        if self.json {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize styles to JSON")?;
            println!("{}", json);
            return Ok(());
        }

        let count = |n: i64| {
            if n > 0 {
                n.to_string()
            } else {
                NOT_APPLICABLE.to_string()
            }
        };

        for entry in &entries {
            println!("{} ({})", entry.name, entry.relative_path);
            println!("  Detail levels: {}", count(entry.detail_levels));
            println!("  Label levels:  {}", count(entry.label_levels));
            if entry.colors.is_empty() {
                println!("  Colors:        {}", NOT_APPLICABLE);
            } else {
                println!("  Colors:        {}", entry.colors.join(", "));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries() {
        let entries = catalog_entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].name, "Bubble Wrap");
        assert!(entries[0].colors.is_empty());

        let refill = entries.iter().find(|e| e.name == "Refill").unwrap();
        assert_eq!(refill.colors.first().map(String::as_str), Some("black"));
        assert_eq!(refill.detail_levels, 11);
    }
}
