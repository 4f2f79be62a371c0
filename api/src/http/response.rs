//! Generic handler response
//!
//! Handler-shaped operations return an `ApiResponse` instead of an axum
//! `Response` so tests can assert on status and body without rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::StarError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// 200 with `{"message": message}`
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_message(StatusCode::OK, message)
    }

    /// Arbitrary JSON body with the given status
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// `{"message": message}` with the given status
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_message(status, message)
    }

    fn with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message.into() }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The `message` field of the body, if there is one
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<StarError> for ApiResponse {
    fn from(err: StarError) -> Self {
        match err {
            StarError::NotFound => Self::error(StatusCode::NOT_FOUND, "Star not found"),
            StarError::CommandValidationFailed => {
                Self::error(StatusCode::BAD_REQUEST, "Invalid star command")
            }
            StarError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            StarError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, body = %self.body, "server error response");
        }
        (self.status, Json(self.body)).into_response()
    }
}
