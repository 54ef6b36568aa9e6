//! Entry point for the **cubease** command-line tool.
//!
//! Loads the optional configuration file, builds the curve catalog, then
//! runs the single command given on the command line.

use cubease::catalog::Catalog;
use clap::Parser;
use cubease::command::Cli;
use cubease::config::Config;
use log::{error, info};

/// Resolve the config directory (`$XDG_CONFIG_HOME/cubease`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("cubease")
}

/// Try to load the config from `$XDG_CONFIG_HOME/cubease/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let config = load_config();
    let catalog = Catalog::from_config(&config);

    match cli.cmd.execute(&catalog, &config.table) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
