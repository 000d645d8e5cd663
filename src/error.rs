use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Text too large: {0}")]
    PayloadTooLarge(String),

    #[error("{message}")]
    SynthesisFailed { message: String, detail: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure: a user-facing message plus optional technical detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::SynthesisFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to error response
    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            Self::SynthesisFailed { detail, .. } => Some(detail.clone()),
            _ => None,
        };

        ErrorResponse {
            message: self.to_string(),
            detail,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Rejections are user-correctable, not failures
        match &self {
            Self::BadRequest(_) | Self::Rejected(_) | Self::NotFound(_) | Self::PayloadTooLarge(_) => {
                tracing::warn!(
                    error = %self,
                    status = %status.as_u16(),
                    "Request rejected"
                );
            }
            Self::SynthesisFailed { detail, .. } => {
                tracing::error!(
                    error = %self,
                    detail = %detail,
                    status = %status.as_u16(),
                    "Request failed"
                );
            }
            Self::Internal(_) => {
                tracing::error!(
                    error = %self,
                    status = %status.as_u16(),
                    "Request failed"
                );
            }
        }

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
