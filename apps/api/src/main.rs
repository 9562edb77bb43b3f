mod config;
mod errors;
mod models;
mod ranking;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ranking::geometry::TriangleLayout;
use crate::ranking::store::{MemoryWeightStore, RedisWeightStore, WeightStore};
use crate::routes::build_router;
use crate::scoring::{CompatibilityEngine, EngineConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchmaker API v{}", env!("CARGO_PKG_VERSION"));

    // Engine configuration: built once, shared read-only
    let engine_config = match &config.engine_config_path {
        Some(path) => {
            let loaded = EngineConfig::from_file(path)?;
            info!("Engine config loaded from {}", path.display());
            loaded
        }
        None => EngineConfig::default(),
    };
    let engine = CompatibilityEngine::new(Arc::new(engine_config));

    // Weight persistence: Redis when configured, process memory otherwise
    let weight_store: Arc<dyn WeightStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis weight store initialized");
            Arc::new(RedisWeightStore::new(client))
        }
        None => {
            info!("REDIS_URL not set; weights are kept in memory");
            Arc::new(MemoryWeightStore::new())
        }
    };

    let state = AppState {
        engine,
        weight_store,
        layout: Arc::new(TriangleLayout::default()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
