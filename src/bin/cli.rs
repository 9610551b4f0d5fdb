//! maxcine CLI
//!
//! Runs the JSON API server, or performs one-off checks and scrapes.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use maxcine::{
    error::Result,
    models::{CategoryTable, Config},
    server,
    services::{HttpFetcher, MovieCatalog},
};

/// maxcine - movie listing scraper API
#[derive(Parser, Debug)]
#[command(name = "maxcine", version, about = "JSON API over the maxcine movie site")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Address to bind, overrides server.host
        #[arg(long, env = "MAXCINE_HOST")]
        host: Option<String>,

        /// Port to bind, overrides server.port
        #[arg(short, long, env = "MAXCINE_PORT")]
        port: Option<u16>,
    },

    /// Validate configuration and selectors
    Validate,

    /// List the supported categories
    Categories,

    /// Scrape a single movie page and print it as JSON
    Movie {
        /// Movie id, the last path segment of its upstream URL
        id: String,
    },
}

/// Initialize logging with a default filter, overridable by `RUST_LOG`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.logging.level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    init_logging(&level);

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });

    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    match command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            log::info!("maxcine starting...");
            server::serve(&config).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            let fetcher = Arc::new(HttpFetcher::from_config(&config.upstream)?);
            if let Err(e) = MovieCatalog::new(&config, fetcher) {
                log::error!("Selector validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Selectors OK");

            log::info!("All validations passed!");
        }

        Command::Categories => {
            for category in CategoryTable::default().iter() {
                println!("{}\t{}\t{}", category.name, category.genre_id, category.slug);
            }
        }

        Command::Movie { id } => {
            config.validate()?;
            let fetcher = Arc::new(HttpFetcher::from_config(&config.upstream)?);
            let catalog = MovieCatalog::new(&config, fetcher)?;

            let movie = catalog.by_id(&id).await?;
            println!("{}", serde_json::to_string_pretty(&movie)?);
        }
    }

    Ok(())
}
