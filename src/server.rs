//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, migrations, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::entities::ApiKey;
use crate::domain::repositories::{ApiKeyRepository, LinkRepository};
use crate::infrastructure::memory::{InMemoryApiKeyRepository, InMemoryLinkRepository};
use crate::infrastructure::persistence::{PgApiKeyRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (or the in-memory store)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Connects the configured store and wires the services.
///
/// Without a database, the in-memory key store is seeded from
/// [`Config::api_keys`].
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (links, keys): (Arc<dyn LinkRepository>, Arc<dyn ApiKeyRepository>) =
        match config.database_url {
            Some(ref database_url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                    .connect(database_url)
                    .await
                    .context("Failed to connect to database")?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;

                let pool = Arc::new(pool);
                (
                    Arc::new(PgLinkRepository::new(pool.clone())),
                    Arc::new(PgApiKeyRepository::new(pool)),
                )
            }
            None => {
                tracing::warn!(
                    "No database configured, using in-memory store. Links are lost on exit"
                );
                let now = Utc::now();
                let keys = config
                    .api_keys
                    .iter()
                    .map(|k| ApiKey::new(k.key.clone(), k.owner_email.clone(), now))
                    .collect();
                (
                    Arc::new(InMemoryLinkRepository::new()),
                    Arc::new(InMemoryApiKeyRepository::with_keys(keys)),
                )
            }
        };

    Ok(AppState::new(links, keys, config.body_limit_bytes))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
