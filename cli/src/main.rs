//! Bornes: interactive menu
//!
//! Opens the station directory and serves the lookup, update and removal
//! workflows from a text menu.
//!
//! ```sh
//! # Run with default config (~/.config/bornes/config.toml)
//! bornes
//!
//! # Custom config path and database file
//! bornes --config /etc/bornes/config.toml --database /var/lib/bornes/bornes.db
//!
//! # Validate config without opening the store
//! bornes --check
//! ```

mod menu;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use bornes::{init_tracing, AppConfig, AppHandle, AppOptions};

/// Bornes: EV charging station directory.
#[derive(Parser, Debug)]
#[command(
    name = "bornes",
    version,
    about = "Interactive menu over the EV charging station directory",
    long_about = "Lists charging stations and their prices, looks up maintainers, \
                  registers vehicles against compatible stations, and updates or \
                  removes stations.\n\n\
                  Default config: ~/.config/bornes/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BORNES_CONFIG")]
    config: Option<PathBuf>,

    /// Override the SQLite database file.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,

    /// Skip schema migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip loading seed data into an empty store.
    #[arg(long)]
    no_seed: bool,

    /// Print result rows as JSON lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(bornes::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref path) = cli.database {
        config.database.path = path.clone();
        config.database.url = None;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if cli.init_config {
        config.save(&config_path)?;
        println!("Configuration written to {}", config_path.display());
        return Ok(());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Seed        : {:?}", config.database.seed_source());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Open the store ─────────────────────────────────────────
    let app = AppHandle::open(AppOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: !cli.no_seed,
    })
    .await?;

    let output = if cli.json {
        menu::Output::Json
    } else {
        menu::Output::Tuples
    };
    let result = menu::run(&app, output).await;

    app.close().await;
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "bornes",
            "--database",
            "/tmp/bornes.db",
            "--log-level",
            "debug",
            "--no-seed",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/bornes.db")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.no_seed);
        assert!(!cli.no_migrate);
        assert!(cli.json);
    }
}
