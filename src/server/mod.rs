// src/server/mod.rs
//! Pantry HTTP server
//!
//! This module provides an HTTP server that:
//! - Serves the recipe collection as a JSON REST API
//! - Seeds the collection with a couple of starter recipes
//! - Tracks request metrics for observability
//!
//! State is shared as `Arc<ServerState>`. The store sits behind its own
//! `RwLock` so reads run concurrently while every mutation holds the write
//! lock for its whole read-check-write sequence; metrics are lock-free
//! atomics beside it.

mod handlers;
pub mod metrics;
mod routes;

pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::store::RecipeStore;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    /// Recipe collection, seeded with the starter recipes
    pub store: RwLock<RecipeStore>,
    /// Metrics collector
    pub metrics: Arc<ServerMetrics>,
}

/// Shared server state type
pub type SharedState = Arc<ServerState>;

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: RwLock::new(RecipeStore::seeded()),
            metrics: Arc::new(ServerMetrics::new()),
        }
    }
}

/// Start the pantry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting pantry server on {}", config.bind_addr);

    let state = Arc::new(ServerState::new(config.clone()));
    {
        let store = state.store.read().await;
        tracing::info!("Store seeded with {} starter recipes", store.len());
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Pantry is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
