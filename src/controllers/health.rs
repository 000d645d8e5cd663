use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::{session::SessionService, tts::TtsService};

/// Services reported by the readiness probe
pub struct HealthState {
    pub tts_service: Arc<TtsService>,
    pub session_service: Arc<SessionService>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": state.tts_service.provider_name(),
            "sessions": state.session_service.active_sessions()
        })),
    )
}
