//! Spy - trade signal and trade logging service

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use axum::Router;
use config::{Config, StoreBackend};
use services::{MemoryTradeStore, StoreError, SupabaseStore, TradeStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TradeStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn TradeStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Construct the trade store selected by configuration.
pub fn build_store(config: &Config) -> std::result::Result<Arc<dyn TradeStore>, StoreError> {
    let store: Arc<dyn TradeStore> = match &config.store {
        StoreBackend::Supabase(supabase) => Arc::new(SupabaseStore::new(
            supabase,
            &config.trades_table,
            config.store_timeout(),
        )?),
        StoreBackend::Memory => Arc::new(MemoryTradeStore::new()),
    };
    info!("Using {} trade store", store.name());
    Ok(store)
}

/// Build the full application router with middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
