//! Signal and risk evaluation API
//!
//! - POST /api/signal - Derive a trade signal from indicator readings
//! - POST /api/manage-risk - Apply stop-loss / take-profit limits to a position
//!
//! Neither endpoint touches the trade store.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::Value;

use crate::api::{parse_payload, ApiResponse};
use crate::error::{AppError, Result};
use crate::services::signals;
use crate::types::{ManageRiskRequest, MarketSnapshot, PayloadError, Position, SignalResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/signal", post(detect_signal))
        .route("/api/manage-risk", post(manage_risk))
}

/// An absent body is the empty snapshot, which evaluates to "No Trade".
async fn detect_signal(body: Bytes) -> Result<Json<ApiResponse<SignalResponse>>> {
    let snapshot = match parse_payload(&body) {
        None | Some(Value::Null) => MarketSnapshot::default(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid market snapshot: {}", e)))?,
    };

    let signal = signals::evaluate(&snapshot);
    Ok(Json(ApiResponse::success(SignalResponse { signal })))
}

async fn manage_risk(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse<Position>>> {
    let Some(payload) = parse_payload(&body)
        .filter(|v| v.get("trade").is_some_and(|trade| !trade.is_null()))
    else {
        return Err(PayloadError::Missing.into());
    };

    let request: ManageRiskRequest = serde_json::from_value(payload)
        .map_err(|e| AppError::BadRequest(format!("Invalid trade: {}", e)))?;

    let limits = state
        .config
        .risk
        .with_overrides(request.stop_loss, request.take_profit);

    Ok(Json(ApiResponse::success(limits.apply(request.trade))))
}
