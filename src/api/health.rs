use crate::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Acknowledgement returned by the liveness endpoint.
pub const RUNNING_MESSAGE: &str = "Spy MVP is running!";

#[derive(Serialize)]
struct TestResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn test_route() -> Json<TestResponse> {
    Json(TestResponse {
        message: RUNNING_MESSAGE,
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test", get(test_route))
        .route("/api/health", get(health))
}
