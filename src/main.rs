//! Map Style Picker - terminal settings screen for map styles
//!
//! Lets users choose a map style, its color variant and level settings, and
//! toggle the transit, bike and walking overlays.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mapstyle::config::Config;
use mapstyle::constants::{APP_BINARY_NAME, APP_NAME, LOG_FILE_NAME};
use mapstyle::tui::StyleScreenEvent;
use mapstyle::{app, cli, logging};
use std::path::{Path, PathBuf};

/// Map Style Picker - choose how the map is drawn
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display the stored style and overlays
    Show(cli::ShowArgs),
    /// List the available map styles
    Styles(cli::StylesArgs),
}

fn main() -> Result<()> {
    run(Cli::parse(), Config::config_file_path)
}

/// Dispatches `cli`. `default_path` is only consulted by commands that read
/// the settings file and were not given `--config`.
fn run(cli: Cli, default_path: impl FnOnce() -> Result<PathBuf>) -> Result<()> {
    let config_path = move || cli.config.map_or_else(default_path, Ok);

    match cli.command {
        Some(Command::Styles(args)) => args.execute(),
        Some(Command::Show(args)) => args.execute(&config_path()?),
        None => run_interactive(&config_path()?, cli.verbose),
    }
}

fn run_interactive(config_path: &Path, verbose: bool) -> Result<()> {
    let log_path = config_path.with_file_name(LOG_FILE_NAME);
    if let Err(e) = logging::init(&log_path, verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let config = match Config::load_from(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!();
            eprintln!("Fix or remove the settings file and try again:");
            eprintln!("  {}", config_path.display());
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {} --help", APP_BINARY_NAME);
            std::process::exit(1);
        }
    };

    match app::run_style_picker_terminal(config, config_path)? {
        StyleScreenEvent::Saved => println!("{}: style saved.", APP_NAME),
        StyleScreenEvent::Cancelled => println!("{}: no style changes.", APP_NAME),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use tempfile::TempDir;

    fn no_config_dir() -> Result<PathBuf> {
        bail!("Failed to determine config directory")
    }

    #[test]
    fn test_styles_runs_without_config_dir() {
        let cli = Cli::try_parse_from(["mapstyle", "styles", "--json"]).unwrap();
        assert!(run(cli, no_config_dir).is_ok());
    }

    #[test]
    fn test_show_needs_a_settings_path() {
        let cli = Cli::try_parse_from(["mapstyle", "show"]).unwrap();
        assert!(run(cli, no_config_dir).is_err());
    }

    #[test]
    fn test_explicit_config_skips_default_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "mapstyle",
            "show",
            "--config",
            path.to_str().unwrap(),
        ])
        .unwrap();

        assert!(run(cli, no_config_dir).is_ok());
    }
}
