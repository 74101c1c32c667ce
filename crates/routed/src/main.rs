//! routed - Route batch server daemon
//!
//! Accepts place lists over HTTP, persists the last batch and answers with
//! Google Maps directions links.
//!
//! Usage:
//!   routed [OPTIONS] [config.toml]
//!
//! Options:
//!   --port <port>    Listen port (overrides config)
//!   --output <path>  Artifact path (overrides config)
//!
//! If no config file is provided, defaults are used. Variables from a `.env`
//! file in the working directory are loaded before the environment is read.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use route_api::{create_router, AppState};
use route_core::{JsonFileStore, RouteBatchProcessor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Parsed command-line arguments
#[derive(Debug, Default)]
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
    /// Listen port override
    port: Option<u16>,
    /// Artifact path override
    output: Option<PathBuf>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                match args.get(i + 1).map(|p| p.parse::<u16>()) {
                    Some(Ok(port)) => result.port = Some(port),
                    Some(Err(_)) => tracing::error!("Invalid port: {}", args[i + 1]),
                    None => tracing::error!("Missing argument for --port"),
                }
                i += 2;
            }
            "--output" | "-o" => {
                match args.get(i + 1) {
                    Some(path) => result.output = Some(PathBuf::from(path)),
                    None => tracing::error!("Missing argument for --output"),
                }
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"routed - Route batch server daemon

Usage: routed [OPTIONS] [config.toml]

Options:
  -p, --port <port>    Listen port (default 8000)
  -o, --output <path>  File the last processed batch is written to
                       (default output.json)
  -h, --help           Print this help message

Environment (also read from a .env file in the working directory):
  CORS_ALLOWED_ORIGINS  Comma-separated list of allowed origins
  RUST_LOG              Log filter (e.g. routed=debug)

Examples:
  # Run with defaults
  routed

  # Run with config file
  routed routed.toml

  # Override port and artifact
  routed -p 9000 -o /var/lib/routed/output.json
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pull in .env before anything reads the environment (RUST_LOG included)
    let env_file = config::load_env_file(None);

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "routed=info,route_api=info,route_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting routed (route batch server)");

    match env_file {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }

    let args = parse_args();

    let mut config = match args.config_path {
        Some(ref path) => {
            tracing::info!("Loading config from: {}", path);
            Config::load(path)?
        }
        None => {
            tracing::info!("No config file provided, using defaults");
            Config::default()
        }
    };
    config.apply_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }

    let processor = RouteBatchProcessor::new(config.routing.group_size)?;
    let store = JsonFileStore::new(config.output.path.clone());
    tracing::info!(
        group_size = processor.group_size(),
        output = %store.path().display(),
        "Batch pipeline ready"
    );

    let state = AppState::new(processor, Arc::new(store))
        .with_allowed_origins(config.cors.allowed_origins.clone());
    let app = create_router(state);

    let addr = config.listen_addr();
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
