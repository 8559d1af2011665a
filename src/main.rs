//! Happiness Dashboard Server
//!
//! Loads the happiness CSV once and serves the interactive dashboard.
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the default locations),
//! then `HAPPINESS_*` environment variables, then the flags below.
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use happiness_dashboard::api::{serve, ApiConfig, AppState};
use happiness_dashboard::config::{generate_default_config, Config, LoggingConfig};
use happiness_dashboard::dashboard::{Dashboard, DashboardSettings};
use happiness_dashboard::data::load_table;

#[derive(Parser)]
#[command(name = "happiness-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard of happiness scores by country or region")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Debug mode (verbose logging)
    #[arg(short, long)]
    debug: bool,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.server.debug |= cli.debug;

    init_tracing(&config.logging, config.server.debug);

    tracing::info!(
        "Starting Happiness Dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );
    if config.server.debug {
        tracing::debug!(?config, "Debug mode enabled");
    }

    let source = config.data.data_source();
    let columns = config.data.columns();
    let table = match load_table(&source, &columns).await {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(source = %source, error = %e, "Failed to load happiness data");
            return Err(e).with_context(|| format!("Failed to load happiness data from {}", source));
        }
    };

    let dashboard = Dashboard::new(table, DashboardSettings::for_columns(&columns));
    let api_config = ApiConfig::from(&config.server);

    serve(AppState::new(dashboard, api_config.clone()), &api_config).await?;

    tracing::info!("Happiness Dashboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig, debug: bool) {
    let level = if debug { "debug" } else { logging.level.as_str() };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("happiness_dashboard={level},tower_http={level}").into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
