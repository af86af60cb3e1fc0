//! Trade logging API
//!
//! - POST /api/execute-trade - Record an executed trade
//! - GET /api/trades - List every recorded trade

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::{parse_payload, ApiResponse};
use crate::error::Result;
use crate::types::NewTrade;
use crate::AppState;

/// Create trading router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/execute-trade", post(execute_trade))
        .route("/api/trades", get(list_trades))
}

/// Record a trade. Whatever status the payload carries, the row is stored
/// as `executed`.
async fn execute_trade(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Value>>>)> {
    let payload = parse_payload(&body);
    let trade = NewTrade::from_payload(payload.as_ref()).map_err(|e| {
        warn!("Rejected trade payload: {}", e);
        e
    })?;

    let record = trade.into_record();
    let rows = state.store.insert(&record).await?;

    info!(
        "Recorded {} trade via {} at {} (allocation {})",
        record.signal, record.broker, record.entry_price, record.capital_allocation
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(rows))))
}

/// Return all trades unfiltered, in store order.
async fn list_trades(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Value>>>> {
    let rows = state.store.select_all().await?;
    Ok(Json(ApiResponse::success(rows)))
}
