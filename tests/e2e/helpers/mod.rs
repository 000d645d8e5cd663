use async_trait::async_trait;
use speechpad_backend::{
    controllers::{health::HealthState, session::SessionController, tts::TtsController},
    domain::{
        session::SessionService,
        tts::{SynthesisError, SynthesisRequest, TtsService},
    },
    infrastructure::{
        http::build_router,
        repositories::{SessionRepository, TtsRepository},
    },
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;


use api_client::TestClient;

/// Bytes returned by the scripted provider, starting with an MP3 frame sync
pub const FAKE_AUDIO: &[u8] = &[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x01, 0x02, 0x03];

/// TTS provider stand-in that records requests and returns scripted results
pub struct ScriptedTtsRepository {
    calls: AtomicUsize,
    last_request: Mutex<Option<SynthesisRequest>>,
    failure: Mutex<Option<String>>,
}

impl ScriptedTtsRepository {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            failure: Mutex::new(None),
        }
    }

    /// Make every following call fail with the given diagnostic
    pub fn fail_with(&self, detail: &str) {
        *self.failure.lock().unwrap() = Some(detail.to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsRepository for ScriptedTtsRepository {
    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match self.failure.lock().unwrap().clone() {
            Some(detail) => Err(SynthesisError::new(detail)),
            None => Ok(FAKE_AUDIO.to_vec()),
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub tts: Arc<ScriptedTtsRepository>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let tts = Arc::new(ScriptedTtsRepository::new());
            let session_repo = Arc::new(SessionRepository::new(1_000, Duration::from_secs(600)));

            let tts_service = Arc::new(TtsService::new(tts.clone()));
            let session_service = Arc::new(SessionService::new(session_repo));

            let health_state = Arc::new(HealthState {
                tts_service: tts_service.clone(),
                session_service: session_service.clone(),
            });
            let tts_controller =
                Arc::new(TtsController::new(tts_service, session_service.clone()));
            let session_controller = Arc::new(SessionController::new(session_service));

            let app = build_router(health_state, tts_controller, session_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                tts,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}
