use super::model::SessionDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for session endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub text: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Request for PUT /api/sessions/{id}/text
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSessionTextRequest {
    pub text: String,
}

impl From<SessionDraft> for SessionResponse {
    fn from(draft: SessionDraft) -> Self {
        Self {
            id: draft.id,
            text: draft.text,
            updated_at: draft.updated_at,
        }
    }
}
