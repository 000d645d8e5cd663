use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::session::{
        SessionResponse, SessionService, SessionServiceApi, UpdateSessionTextRequest,
    },
    error::AppResult,
};

pub struct SessionController {
    session_service: Arc<SessionService>,
}

impl SessionController {
    pub fn new(session_service: Arc<SessionService>) -> Self {
        Self { session_service }
    }

    /// POST /api/sessions - Start a new editor session
    pub async fn create_session(
        State(controller): State<Arc<SessionController>>,
    ) -> (StatusCode, Json<SessionResponse>) {
        let session = controller.session_service.create_session().await;
        (StatusCode::CREATED, Json(session))
    }

    /// GET /api/sessions/{sessionId} - Read the remembered draft
    pub async fn get_session(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller.session_service.get_session(session_id).await?;
        Ok(Json(session))
    }

    /// PUT /api/sessions/{sessionId}/text - Remember the editor text
    pub async fn set_text(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<UpdateSessionTextRequest>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller
            .session_service
            .set_text(session_id, request.text)
            .await?;
        Ok(Json(session))
    }

    /// POST /api/sessions/{sessionId}/sample - Copy the sample fable into the editor
    pub async fn copy_sample(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<SessionResponse>> {
        let session = controller.session_service.copy_sample(session_id).await?;
        Ok(Json(session))
    }

    /// DELETE /api/sessions/{sessionId}/text - Clear the editor
    pub async fn clear_text(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.session_service.clear_text(session_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
