use super::options::VoiceOption;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/tts/synthesize
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TtsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// Response for GET /api/tts/options
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: &'static [VoiceOption],
    pub accents: &'static [VoiceOption],
    pub default_language: &'static str,
    pub default_accent: &'static str,
    pub default_slow: bool,
    pub max_chars: usize,
}
