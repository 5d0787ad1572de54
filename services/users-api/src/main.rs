use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use common::ServerConfig;
use tokio::net::TcpListener;
use users_api::{AppState, create_router, repositories::UserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting users API service");

    let config = ServerConfig::from_env()?;
    let address = config.bind_address();

    let app_state = AppState::new(UserRepository::new(), config);

    // Start the web server
    let app = create_router(app_state);

    let listener = TcpListener::bind(&address).await?;
    info!("Users API service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Users API service stopped");

    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
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

    info!("Shutdown signal received");
}
