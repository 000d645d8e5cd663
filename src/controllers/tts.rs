use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        session::{SessionService, SessionServiceApi},
        tts::{
            options::{
                VoiceOption, ACCENT_OPTIONS, DEFAULT_ACCENT, DEFAULT_LANGUAGE, LANGUAGE_OPTIONS,
            },
            OptionsResponse, SynthesisCommand, SynthesisOutcome, TtsRequest, TtsService,
            TtsServiceApi, MAX_TEXT_CHARS, REJECTED_MESSAGE,
        },
    },
    error::{AppError, AppResult},
};

pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

pub struct TtsController {
    tts_service: Arc<TtsService>,
    session_service: Arc<SessionService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, session_service: Arc<SessionService>) -> Self {
        Self {
            tts_service,
            session_service,
        }
    }

    /// POST /api/tts/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if let Some(text) = &request.text {
            let char_count = text.chars().count();
            if char_count > MAX_TEXT_CHARS {
                return Err(AppError::PayloadTooLarge(format!(
                    "Text must be {} characters or less, got {}",
                    MAX_TEXT_CHARS, char_count
                )));
            }
        }

        let default_text = match request.session_id {
            Some(session_id) => controller.session_service.default_text(session_id).await?,
            None => None,
        };

        let language = offered_option(request.language, LANGUAGE_OPTIONS, DEFAULT_LANGUAGE)
            .ok_or_else(|| AppError::BadRequest("Unsupported language".to_string()))?;
        let accent = offered_option(request.accent, ACCENT_OPTIONS, DEFAULT_ACCENT)
            .ok_or_else(|| AppError::BadRequest("Unsupported accent".to_string()))?;

        let command = SynthesisCommand {
            text: request.text,
            filename: request.filename,
            default_text,
            language,
            accent,
            slow: request.slow.unwrap_or(false),
        };

        let result = match controller.tts_service.run(command).await {
            SynthesisOutcome::Success(result) => result,
            SynthesisOutcome::Rejected => {
                return Err(AppError::Rejected(REJECTED_MESSAGE.to_string()));
            }
            SynthesisOutcome::Failed {
                user_message,
                diagnostic,
            } => {
                return Err(AppError::SynthesisFailed {
                    message: user_message,
                    detail: diagnostic,
                });
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_MIME_TYPE));
        headers.insert(
            header::CONTENT_DISPOSITION,
            header_value(&content_disposition(&result.filename))?,
        );
        headers.insert("x-elapsed-seconds", header_value(&result.elapsed_display())?);
        headers.insert("x-character-count", HeaderValue::from(result.char_count));
        headers.insert("x-audio-bytes", HeaderValue::from(result.audio.len()));

        Ok((StatusCode::OK, headers, Body::from(result.audio)))
    }

    /// GET /api/tts/options - Voice parameters offered to clients
    pub async fn options() -> Json<OptionsResponse> {
        Json(OptionsResponse {
            languages: LANGUAGE_OPTIONS,
            accents: ACCENT_OPTIONS,
            default_language: DEFAULT_LANGUAGE,
            default_accent: DEFAULT_ACCENT,
            default_slow: false,
            max_chars: MAX_TEXT_CHARS,
        })
    }
}

/// The requested code if the catalog offers it, the default when absent
fn offered_option(
    requested: Option<String>,
    catalog: &[VoiceOption],
    default: &str,
) -> Option<String> {
    match requested {
        None => Some(default.to_string()),
        Some(code) => catalog
            .iter()
            .any(|option| option.code == code)
            .then_some(code),
    }
}

fn header_value(value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AppError::Internal(format!("Invalid header value: {}", e)))
}

/// Offer the audio as a download, with an ASCII fallback name for old clients
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}
