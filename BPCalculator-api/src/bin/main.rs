use std::net::SocketAddr;

use dotenv::dotenv;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use bp_calculator_api::api::create_application;
use bp_calculator_api::config::{AppConfig, ConfigError};
use bp_calculator_api::logging::file_log_writer;

/// Errors that can stop the server during startup or while serving
#[derive(Debug, Error)]
enum AppError {
    /// Error that occurs during server operations
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log directory could not be created
    #[error("Failed to open log directory {path}: {source}")]
    Logging {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The main entry point for the BP Calculator server
///
/// This function:
/// 1. Initializes environment variables from .env file
/// 2. Loads configuration
/// 3. Sets up tracing to stdout and a daily rolling log file
/// 4. Creates and starts the Axum web application
/// 5. Handles graceful shutdown
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    let config = AppConfig::from_env()?;

    // Initialize tracing for structured logging
    let env_filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_writer, _log_guard) =
        file_log_writer(&config.log_dir).map_err(|source| AppError::Logging {
            path: config.log_dir.display().to_string(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stdout))
        .with(fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(file_writer))
        .with(env_filter)
        .init();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        environment = %config.environment,
        log_dir = %config.log_dir.display(),
        "Starting web host with BP Calculator and Category Explainer"
    );

    // Create the Axum application with all routes and middleware
    let app = create_application(config);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Serve the application with graceful shutdown support
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server...");
}
