/// Satellite tasking request intake service
mod config;
mod domain;
mod errors;
mod handlers;
mod repo;
mod routes;
mod services;
mod utils;
mod validation;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::repo::{init_db, MemoryStore, PgRequestStore, RequestStore};
use crate::routes::build_router;
use crate::services::UserRequestService;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    let store = open_store(&config).await?;
    let user_requests = Arc::new(UserRequestService::new(store));

    let state = AppState { user_requests };
    let app = build_router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("domino_intake listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Postgres when DATABASE_URL is configured, process memory otherwise
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn RequestStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await?;
            info!("Database connection pool established");

            init_db(&pool).await?;
            info!("Database schema initialized");

            Ok(Arc::new(PgRequestStore::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory request store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
