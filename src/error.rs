use crate::services::StoreError;
use crate::types::PayloadError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers when the trade store fails.
pub const STORE_FAILURE_MESSAGE: &str = "Trade store request failed";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Payload(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Payload(e) => e.to_string(),
            // Store details stay in the logs
            AppError::Store(e) => {
                tracing::error!("Trade store error: {}", e);
                STORE_FAILURE_MESSAGE.to_string()
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Payload(PayloadError::Missing).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Store(StoreError::UnexpectedShape("x".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::BadRequest("Invalid trade".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_response_hides_detail() {
        let error = AppError::Store(StoreError::Api {
            status: 401,
            message: "Invalid API key".into(),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
