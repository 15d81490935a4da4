mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::{Config, StorageBackend, DEFAULT_INDEX_FILE},
    state::AppState,
};

/// Todos - a small JSON API for managing to-do items
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "4000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = "memory", env = "STORAGE")]
    storage: StorageBackend,

    /// Database connection string (required by the sqlite backend)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// API info page served on GET /
    #[arg(long, default_value = DEFAULT_INDEX_FILE, env = "INDEX_FILE")]
    index_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before `Cli::parse` for `.env` values to reach the `env` fallbacks
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let config = Config {
        storage: cli.storage,
        database_url: cli.database_url.filter(|url| !url.is_empty()),
        index_file: cli.index_file,
        ..Config::from_env()
    };

    // Fails fast when the selected backend can't be reached
    let state = AppState::new(&config).await?;

    let app = create_app(state.clone());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("Listening on port {}", listener.local_addr()?.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.close().await;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
