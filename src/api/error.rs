//! API error responses
//!
//! Maps `duet_core::Error` onto HTTP status codes with a JSON body of the
//! form `{"success": false, "error": "...", "code": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Handler-level error
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Request parameters are missing or malformed (422)
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ErrorBody::new(message, "INVALID_REQUEST"),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.error
    }
}

impl From<duet_core::Error> for ApiError {
    fn from(err: duet_core::Error) -> Self {
        let status = match &err {
            duet_core::Error::AgentUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            duet_core::Error::ConfigurationUnavailable(_) | duet_core::Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            body: ErrorBody::new(err.to_string(), err.code()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(status = %self.status, code = %self.body.code, "{}", self.body.error);
        }
        (self.status, Json(self.body)).into_response()
    }
}
