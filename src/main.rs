use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use movie_catalog_server::movie_store::{InMemoryMovieStore, MovieStore};
use movie_catalog_server::server::{self, run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to an optional TOML config file; file values override CLI.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    // Records live only as long as the process; the store is built empty
    // at every start.
    let movie_store = Arc::new(InMemoryMovieStore::new());

    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_store_metrics(movie_store.count());

    info!("Ready to serve at port {}!", config.port);
    info!("Metrics available at port {}!", config.metrics_port);
    run_server(
        movie_store,
        config.logging_level,
        config.port,
        config.metrics_port,
    )
    .await
}
