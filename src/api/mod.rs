pub mod analysis;
pub mod health;
pub mod trading;

use crate::AppState;
use axum::Router;
use serde::Serialize;
use serde_json::Value;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(trading::router())
        .merge(analysis::router())
}

/// Success envelope shared by the JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Parse a raw request body as JSON.
///
/// Empty and unparseable bodies both yield `None`; callers decide whether an
/// absent payload is an error.
pub fn parse_payload(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload(b""), None);
        assert_eq!(parse_payload(b"  \n"), None);
        assert_eq!(parse_payload(b"{not json"), None);
        assert_eq!(parse_payload(br#"{"broker":"IBKR"}"#), Some(json!({"broker": "IBKR"})));
    }

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json, json!({"status": "success", "data": [1, 2]}));
    }
}
