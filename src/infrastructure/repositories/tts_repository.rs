use crate::domain::tts::{SynthesisError, SynthesisRequest};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the external hosted TTS provider.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into chunks if needed
/// - Joining audio chunks into a single MP3 stream
///
/// Implementations must not retry and must not write audio to disk.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Short identifier used in logs and readiness reports
    fn provider_name(&self) -> &'static str;

    /// Synthesize text to speech
    ///
    /// Returns the complete audio payload (MP3) once fully received
    ///
    /// # Arguments
    /// * `request` - Trimmed, non-empty text plus language, accent hint and speed
    ///
    /// # Errors
    /// Any provider failure, carrying the provider's diagnostic message
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError>;
}
