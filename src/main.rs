use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use speechpad_backend::controllers::{health::HealthState, session::SessionController, tts::TtsController};
use speechpad_backend::domain::{session::SessionService, tts::TtsService};
use speechpad_backend::infrastructure::config::{Config, LogFormat};
use speechpad_backend::infrastructure::http::{build_router, start_http_server};
use speechpad_backend::infrastructure::repositories::{
    GoogleTranslateTtsConfig, GoogleTranslateTtsRepository, SessionRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting SpeechPad Backend on {}:{}",
        config.host,
        config.port
    );

    // Create TTS provider client
    tracing::info!(
        base_url = config.tts_base_url.as_deref().unwrap_or("https://translate.google.{accent}"),
        timeout_secs = config.tts_timeout_secs,
        lang_check = config.tts_lang_check,
        "Initializing Google Translate TTS client"
    );
    let tts_repo = Arc::new(GoogleTranslateTtsRepository::new(GoogleTranslateTtsConfig {
        base_url: config.tts_base_url.clone(),
        timeout: config.tts_timeout(),
        lang_check: config.tts_lang_check,
    })?);

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let session_repo = Arc::new(SessionRepository::new(
        config.session_max_capacity,
        config.session_idle(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let tts_service = Arc::new(TtsService::new(tts_repo));
    let session_service = Arc::new(SessionService::new(session_repo));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let health_state = Arc::new(HealthState {
        tts_service: tts_service.clone(),
        session_service: session_service.clone(),
    });
    let tts_controller = Arc::new(TtsController::new(tts_service, session_service.clone()));
    let session_controller = Arc::new(SessionController::new(session_service));

    // Start HTTP server with all routes
    let app = build_router(health_state, tts_controller, session_controller);
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "speechpad_backend=debug,tower_http=debug"
    } else {
        "speechpad_backend=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
