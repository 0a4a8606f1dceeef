// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use product_inventory::config::{AppConfig, StoreBackend};
use product_inventory::store::{MemoryProductStore, PgProductStore, ProductStore};
use product_inventory::{build_app, database, AppError, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_inventory=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let store: Arc<dyn ProductStore> = match config.backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| AppError::config("DATABASE_URL must be set"))?;
            let pool = database::create_pool(url, config.max_connections).await?;
            database::ensure_schema(&pool).await?;
            Arc::new(PgProductStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, products are lost on restart");
            Arc::new(MemoryProductStore::new())
        }
    };

    let app = build_app(AppState::new(store));

    // Try PORT..PORT+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        let (listener, addr) = bound.ok_or_else(|| {
            AppError::internal(format!(
                "Failed to bind to any port starting at {} on {}",
                config.port, config.host
            ))
        })?;
        tracing::info!("Server running on http://{}", addr);
        listener
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
