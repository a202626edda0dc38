//! Stockcast - Minimal product catalog and weather forecast HTTP API

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockcast::api::{self, AppState};
use stockcast::config::Config;
use stockcast::random::ThreadRngSource;
use stockcast::repo::InMemoryCatalog;

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Minimal product catalog and weather forecast HTTP API")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("stockcast={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(port) = cli.port {
        config.http_port = port;
    }

    let state = AppState::new(Arc::new(InMemoryCatalog::new()), Arc::new(ThreadRngSource));

    tracing::info!(
        "Starting HTTP server on port {} ({:?})",
        config.http_port,
        config.environment
    );

    let router = api::create_router(state, config.environment);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;

    println!("Stockcast server running at http://localhost:{}", config.http_port);
    println!("  Forecast: http://localhost:{}/weatherforecast", config.http_port);
    println!("  Products: http://localhost:{}/products/1", config.http_port);
    if config.environment.docs_enabled() {
        println!("  API Docs: http://localhost:{}/docs", config.http_port);
    }
    println!("  Health:   http://localhost:{}/health", config.http_port);

    axum::serve(listener, router).await?;

    Ok(())
}
