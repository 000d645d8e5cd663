pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health::{self, HealthState},
    session::SessionController,
    tts::TtsController,
};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(
    health_state: Arc<HealthState>,
    tts_controller: Arc<TtsController>,
    session_controller: Arc<SessionController>,
) -> Router {
    // TTS routes
    let tts_routes = Router::new()
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .route("/api/tts/options", get(TtsController::options))
        .with_state(tts_controller);

    // Session draft routes
    let session_routes = Router::new()
        .route("/api/sessions", post(SessionController::create_session))
        .route("/api/sessions/:sessionId", get(SessionController::get_session))
        .route(
            "/api/sessions/:sessionId/text",
            put(SessionController::set_text).delete(SessionController::clear_text),
        )
        .route(
            "/api/sessions/:sessionId/sample",
            post(SessionController::copy_sample),
        )
        .with_state(session_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(health_state)
        .merge(tts_routes)
        .merge(session_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
