//! Persistence boundary for executed trades.

use crate::types::TradeRecord;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by a trade store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    #[error("Store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected store response: {0}")]
    UnexpectedShape(String),
}

/// A table-backed store of trade rows.
///
/// Rows come back as schema-less JSON since the backend may add columns
/// (ids, timestamps) that the service relays without interpreting.
#[async_trait]
pub trait TradeStore: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Insert one record and return the rows the store created.
    async fn insert(&self, record: &TradeRecord) -> Result<Vec<Value>, StoreError>;

    /// Return every row, in whatever order the backend yields them.
    async fn select_all(&self) -> Result<Vec<Value>, StoreError>;
}
