//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("{0}")]
    BadRequest(String),
    #[error("Request body too large")]
    PayloadTooLarge,
}

/// Error envelope returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "User not found")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        };
        tracing::debug!(status = %status, error = %self, "request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("User"), StatusCode::NOT_FOUND, "User not found")]
    #[case(AppError::DuplicateEmail, StatusCode::BAD_REQUEST, "Email already registered")]
    #[case(AppError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")]
    #[case(AppError::BadRequest("body must be a JSON object".into()), StatusCode::BAD_REQUEST, "body must be a JSON object")]
    #[tokio::test]
    async fn maps_errors_to_status_and_body(
        #[case] error: AppError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let response = error.into_response();
        assert_eq!(response.status(), status);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": message }));
    }
}
