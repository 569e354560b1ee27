//! Book inventory server binary

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use book_inventory_server::{
    api, config::AppConfig, logging, repository::Repository, services::Services, AppError, AppState,
};

#[derive(Parser)]
#[command(version, about = "In-memory library inventory server")]
struct Cli {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    let _log_guard = logging::init(&config.logging)?;

    tracing::info!("Starting book inventory server v{}", env!("CARGO_PKG_VERSION"));

    // Any dump failure is fatal before the listener binds
    let repository = Repository::load(&config.dumps).map_err(AppError::Load)?;

    let addr = config.server.socket_addr()?;
    let state = AppState::new(Services::new(repository));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
