use super::model::{
    SynthesisCommand, SynthesisOutcome, SynthesisRequest, SynthesisResult, FAILED_MESSAGE,
};
use super::naming::{make_filename, Clock, SystemClock};
use super::normalizer::normalize;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    clock: Arc<dyn Clock>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self::with_clock(tts_repo, Arc::new(SystemClock))
    }

    pub fn with_clock(tts_repo: Arc<dyn TtsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { tts_repo, clock }
    }

    pub fn provider_name(&self) -> &'static str {
        self.tts_repo.provider_name()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Run one text-to-audio request end to end
    ///
    /// This operation:
    /// - Trims the text and derives a sanitized filename stem
    /// - Calls the synthesis provider once, without retries
    /// - Names the output with the current local timestamp
    ///
    /// Never fails: provider errors come back as `SynthesisOutcome::Failed`
    async fn run(&self, command: SynthesisCommand) -> SynthesisOutcome;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn run(&self, command: SynthesisCommand) -> SynthesisOutcome {
        tracing::info!(
            stage = "received",
            text_length = command.text.as_deref().map(str::len),
            has_default_text = command.default_text.is_some(),
            language = %command.language,
            accent = %command.accent,
            slow = command.slow,
            "TTS synthesis request"
        );

        let Some(input) = normalize(
            command.text.as_deref(),
            command.filename.as_deref(),
            command.default_text.as_deref(),
        ) else {
            tracing::warn!(stage = "rejected", "Empty text, nothing to synthesize");
            return SynthesisOutcome::Rejected;
        };

        let char_count = input.clean_text.chars().count();
        tracing::info!(
            stage = "validated",
            char_count = char_count,
            stem = %input.stem,
            "Input normalized"
        );

        let request = SynthesisRequest {
            text: input.clean_text,
            language: command.language,
            accent: command.accent,
            slow: command.slow,
        };

        let start = Instant::now();
        let result = self.tts_repo.synthesize(&request).await;
        let elapsed = start.elapsed();

        match result {
            Ok(audio) => {
                let filename = make_filename(&input.stem, self.clock.as_ref());
                tracing::info!(
                    stage = "succeeded",
                    provider = self.tts_repo.provider_name(),
                    audio_size_bytes = audio.len(),
                    latency_ms = elapsed.as_millis(),
                    filename = %filename,
                    "TTS synthesis completed"
                );
                SynthesisOutcome::Success(SynthesisResult {
                    audio,
                    filename,
                    char_count,
                    elapsed,
                })
            }
            Err(err) => {
                tracing::error!(
                    stage = "failed",
                    provider = self.tts_repo.provider_name(),
                    error = %err,
                    latency_ms = elapsed.as_millis(),
                    language = %request.language,
                    accent = %request.accent,
                    "TTS synthesis failed"
                );
                SynthesisOutcome::Failed {
                    user_message: FAILED_MESSAGE.to_string(),
                    diagnostic: err.detail().to_string(),
                }
            }
        }
    }
}
