use common::tracing::{init_tracing, init_tracing_pretty};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};
use weather_proxy::config::Config;
use weather_proxy::handlers::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Variables already in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();
    let config = Config::from_env();
    if config.json_logs {
        init_tracing("info");
    } else {
        init_tracing_pretty("info");
    }

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "Could not read .env"),
    }

    for key in config.missing_keys() {
        warn!(key, "Credential not set, upstream calls will be rejected");
    }

    let app = weather_proxy::app(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Weather proxy starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Weather proxy stopped");
    Ok(())
}

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
        _ = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }

    warn!("Draining in-flight requests, shutting down gracefully...");
}
