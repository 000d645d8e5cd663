use super::dto::SessionResponse;
use super::error::SessionServiceError;
use super::model::{SessionDraft, SAMPLE_TEXT};
use crate::domain::tts::MAX_TEXT_CHARS;
use crate::infrastructure::repositories::SessionRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct SessionService {
    session_repo: Arc<SessionRepository>,
}

impl SessionService {
    pub fn new(session_repo: Arc<SessionRepository>) -> Self {
        Self { session_repo }
    }

    /// Approximate number of live sessions
    pub fn active_sessions(&self) -> u64 {
        self.session_repo.count()
    }
}

#[async_trait]
pub trait SessionServiceApi: Send + Sync {
    async fn create_session(&self) -> SessionResponse;

    async fn get_session(&self, session_id: Uuid) -> Result<SessionResponse, SessionServiceError>;

    async fn set_text(
        &self,
        session_id: Uuid,
        text: String,
    ) -> Result<SessionResponse, SessionServiceError>;

    /// Replace the draft with the built-in sample text
    async fn copy_sample(&self, session_id: Uuid) -> Result<SessionResponse, SessionServiceError>;

    async fn clear_text(&self, session_id: Uuid) -> Result<(), SessionServiceError>;

    /// Draft text to use when a synthesis request carries no text
    async fn default_text(&self, session_id: Uuid) -> Result<Option<String>, SessionServiceError>;
}

#[async_trait]
impl SessionServiceApi for SessionService {
    async fn create_session(&self) -> SessionResponse {
        let draft = SessionDraft::new();
        self.session_repo.save(draft.clone()).await;

        tracing::info!(session_id = %draft.id, "Session created");

        draft.into()
    }

    async fn get_session(&self, session_id: Uuid) -> Result<SessionResponse, SessionServiceError> {
        Ok(self.find_session(session_id).await?.into())
    }

    async fn set_text(
        &self,
        session_id: Uuid,
        text: String,
    ) -> Result<SessionResponse, SessionServiceError> {
        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(SessionServiceError::TooLarge(format!(
                "Text must be {} characters or less, got {}",
                MAX_TEXT_CHARS, char_count
            )));
        }

        self.update_text(session_id, Some(text)).await
    }

    async fn copy_sample(&self, session_id: Uuid) -> Result<SessionResponse, SessionServiceError> {
        self.update_text(session_id, Some(SAMPLE_TEXT.to_string()))
            .await
    }

    async fn clear_text(&self, session_id: Uuid) -> Result<(), SessionServiceError> {
        self.update_text(session_id, None).await?;
        Ok(())
    }

    async fn default_text(&self, session_id: Uuid) -> Result<Option<String>, SessionServiceError> {
        Ok(self.find_session(session_id).await?.text)
    }
}

impl SessionService {
    async fn find_session(&self, session_id: Uuid) -> Result<SessionDraft, SessionServiceError> {
        self.session_repo
            .find_by_id(session_id)
            .await
            .ok_or(SessionServiceError::NotFound)
    }

    async fn update_text(
        &self,
        session_id: Uuid,
        text: Option<String>,
    ) -> Result<SessionResponse, SessionServiceError> {
        let draft = self.find_session(session_id).await?.with_text(text);
        self.session_repo.save(draft.clone()).await;

        tracing::debug!(
            session_id = %session_id,
            text_length = draft.text.as_deref().map(str::len),
            "Session draft updated"
        );

        Ok(draft.into())
    }
}
