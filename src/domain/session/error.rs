use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error("session not found")]
    NotFound,
}

impl From<SessionServiceError> for AppError {
    fn from(err: SessionServiceError) -> Self {
        match err {
            SessionServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            SessionServiceError::NotFound => AppError::NotFound("Session not found".to_string()),
        }
    }
}
