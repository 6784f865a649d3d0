//! Mapping of core errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use advisor_core::errors::Error as CoreError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            // Upstream dependency failures: market data, AI provider, SMTP.
            CoreError::Market(_) | CoreError::Ai(_) | CoreError::Email(_) => {
                StatusCode::BAD_GATEWAY
            }
            CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        } else {
            tracing::debug!("request rejected: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
