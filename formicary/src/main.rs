mod app;
mod config;
mod effects;
mod engine;
mod simulation;
mod ui;
mod util;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{GameConfig, window_conf};

/// Command-line arguments for Formicary.
#[derive(Parser)]
#[command(name = "Formicary", version, about = "Idle ant colony")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Loads the game configuration from a TOML file or uses defaults.
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            let config: GameConfig =
                toml::from_str(&content).context("Failed to parse config file")?;
            println!("Loaded config from '{}'", path.display());
            Ok(config)
        }
        _ => {
            println!("No config file provided, using defaults.");
            Ok(GameConfig::default())
        }
    }
}

/// Main entry point for the Formicary application.
#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();

    match load_config(cli.config) {
        Ok(config) => {
            let mut app = App::new(config);
            app.run().await;
        }
        Err(e) => {
            eprintln!("Error loading config: {:#}", e);
        }
    }
}
