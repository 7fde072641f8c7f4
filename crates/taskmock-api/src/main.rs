//! taskmock server binary
//!
//! Simulated backend for UI testing of the lists-of-tasks application.
//! State lives in memory for the lifetime of the process; restarting the
//! server starts a fresh session.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! taskmock --config config.yaml
//!
//! # With environment variables only
//! TASKMOCK_SERVER__PORT=9090 taskmock
//! ```

use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;
use tracing::info;

use taskmock_api::config::ServerConfig;
use taskmock_api::http::{create_router_with_body_limit, AppState};
use taskmock_api::logging::{init_logging, parse_log_level, LoggingConfig};
use taskmock_storage::MemorySessionStore;

/// taskmock - Simulated task-list backend for UI test harnesses
#[derive(Parser, Debug)]
#[command(name = "taskmock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = args.config {
        ServerConfig::load(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    // Initialize logging
    let log_config = LoggingConfig {
        json_format: config.logging.json,
        default_level: parse_log_level(&config.logging.level),
    };
    init_logging(log_config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting taskmock server"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Session state: empty store, fresh id namespace and clock
    let storage = MemorySessionStore::new_shared();
    let state = AppState::new(storage);
    let router = create_router_with_body_limit(state, config.server.body_limit_bytes);

    info!(%addr, "HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete, session state discarded");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = Args::try_parse_from(["taskmock"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["taskmock", "--config", "config.yaml"]).unwrap();
        assert_eq!(args.config, Some("config.yaml".to_string()));

        let args = Args::try_parse_from(["taskmock", "-c", "test.yaml"]).unwrap();
        assert_eq!(args.config, Some("test.yaml".to_string()));
    }
}
