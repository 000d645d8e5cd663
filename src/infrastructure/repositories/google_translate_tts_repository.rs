use super::tts_repository::TtsRepository;
use crate::domain::tts::{SynthesisError, SynthesisRequest};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{header, Client, StatusCode};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

/// Google Translate rejects longer texts per request
const MAX_CHUNK_CHARS: usize = 100;

const GOOGLE_TTS_RPC: &str = "jQ1olc";
const BATCHEXECUTE_PATH: &str = "/_/TranslateWebserverUi/data/batchexecute";
const REFERER: &str = "http://translate.google.com/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
const DEFAULT_TLD: &str = "com";

/// Always end a token, and get a space appended during pre-processing
const TONE_MARKS: &[char] = &['?', '!', '？', '！'];
/// End a token only when followed by whitespace, so `1.5` stays intact
const PERIOD_COMMA: &[char] = &['.', ','];
/// Always end a token
const OTHER_PUNCTUATION: &[char] = &[
    '¡', '(', ')', '[', ']', '¿', '…', '‥', '،', ';', '—', '。', '，', '、', '：', '\n',
];

/// Language codes accepted by the Google Translate TTS endpoint
const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW",
];

static AUDIO_PAYLOAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("valid audio payload pattern"));
static TLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2,3}(\.[a-z]{2,3})?$").expect("valid tld pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

#[derive(Debug, Clone)]
pub struct GoogleTranslateTtsConfig {
    /// Replaces `https://translate.google.{accent}` when set
    pub base_url: Option<String>,
    /// Upper bound for each provider call
    pub timeout: Duration,
    /// Refuse unknown language codes before calling the provider
    pub lang_check: bool,
}

/// Google Translate web TTS implementation of TTS repository
pub struct GoogleTranslateTtsRepository {
    client: Client,
    config: GoogleTranslateTtsConfig,
}

impl GoogleTranslateTtsRepository {
    pub fn new(config: GoogleTranslateTtsConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    /// Provider origin for an accent hint; only plain domain labels are accepted
    fn host(&self, tld: &str) -> Result<String, SynthesisError> {
        if !TLD.is_match(tld) {
            return Err(SynthesisError::new(format!("Unsupported tld '{}'", tld)));
        }

        Ok(match &self.config.base_url {
            Some(base_url) => base_url.trim_end_matches('/').to_string(),
            None => format!("https://translate.google.{}", tld),
        })
    }

    /// Resolve the language code against the supported table
    fn check_language(&self, language: &str) -> Result<String, SynthesisError> {
        let language = language.trim();
        if !self.config.lang_check {
            return Ok(language.to_string());
        }

        SUPPORTED_LANGUAGES
            .iter()
            .find(|supported| supported.eq_ignore_ascii_case(language))
            .map(|supported| supported.to_string())
            .ok_or_else(|| SynthesisError::new(format!("Language not supported: {}", language)))
    }

    /// Call the batchexecute endpoint to synthesize a single chunk
    async fn call_google(
        &self,
        host: &str,
        text: &str,
        language: &str,
        tld: &str,
        slow: bool,
    ) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}{}", host, BATCHEXECUTE_PATH);

        tracing::debug!(
            url = %url,
            language = language,
            slow = slow,
            text_length = text.len(),
            "Calling Google Translate TTS"
        );

        let response = self
            .client
            .post(&url)
            .header(header::REFERER, REFERER)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(package_rpc(text, language, slow))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    url = %url,
                    language = language,
                    tld = tld,
                    "Google Translate TTS request failed"
                );
                SynthesisError::new(self.transport_failure(host, tld, &e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::new(infer_failure(
                status,
                tld,
                language,
                self.config.lang_check,
            )));
        }

        let body = response.text().await.map_err(|e| {
            SynthesisError::new(format!("Failed to read TTS API response: {}", e))
        })?;

        extract_audio(&body)?.ok_or_else(|| {
            SynthesisError::new(infer_failure(status, tld, language, self.config.lang_check))
        })
    }

    fn transport_failure(&self, host: &str, tld: &str, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            return format!(
                "Timed out after {}ms waiting for TTS API",
                self.config.timeout.as_millis()
            );
        }

        let cause = if tld != DEFAULT_TLD {
            format!("Host '{}' is not reachable", host)
        } else {
            err.to_string()
        };
        format!("Failed to connect. Probable cause: {}", cause)
    }
}

#[async_trait]
impl TtsRepository for GoogleTranslateTtsRepository {
    fn provider_name(&self) -> &'static str {
        "google_translate"
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        let start_time = Instant::now();

        let language = self.check_language(&request.language)?;
        let tld = match request.accent.trim() {
            "" => DEFAULT_TLD,
            tld => tld,
        };
        let host = self.host(tld)?;

        let chunks = split_into_chunks(&request.text);
        if chunks.is_empty() {
            return Err(SynthesisError::new("No text to send to TTS API"));
        }

        tracing::info!(
            language = %language,
            tld = tld,
            slow = request.slow,
            text_length = request.text.len(),
            chunk_count = chunks.len(),
            "Starting Google Translate TTS synthesis"
        );

        let mut audio_data = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self
                .call_google(&host, chunk, &language, tld, request.slow)
                .await?;
            audio_data.extend(part);

            tracing::debug!(
                chunk_index = index,
                chunk_chars = chunk.chars().count(),
                total_audio_size = audio_data.len(),
                "Chunk synthesized and appended"
            );
        }

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google_translate",
            latency_ms = duration.as_millis(),
            chunk_count = chunks.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}

/// Build the `f.req` form body for one chunk
fn package_rpc(text: &str, language: &str, slow: bool) -> String {
    let speed = if slow { Value::Bool(true) } else { Value::Null };
    let parameter = json!([text, language, speed, "null"]).to_string();
    let rpc = json!([[[GOOGLE_TTS_RPC, parameter, null, "generic"]]]).to_string();

    format!("f.req={}&", urlencoding::encode(&rpc))
}

/// Decode every audio payload in a batchexecute response.
/// `Ok(None)` when the response carries no audio at all.
fn extract_audio(body: &str) -> Result<Option<Vec<u8>>, SynthesisError> {
    let mut audio: Option<Vec<u8>> = None;

    for line in body.lines().filter(|line| line.contains(GOOGLE_TTS_RPC)) {
        if let Some(captures) = AUDIO_PAYLOAD.captures(line) {
            let bytes = STANDARD.decode(&captures[1]).map_err(|e| {
                SynthesisError::new(format!("Malformed audio payload from TTS API: {}", e))
            })?;
            audio.get_or_insert_with(Vec::new).extend(bytes);
        }
    }

    Ok(audio)
}

/// Turn an HTTP status into a diagnostic with its probable cause
fn infer_failure(status: StatusCode, tld: &str, language: &str, lang_check: bool) -> String {
    let premise = format!(
        "{} ({}) from TTS API",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    let cause = if status == StatusCode::FORBIDDEN {
        Some("Bad token or upstream API changes".to_string())
    } else if status == StatusCode::NOT_FOUND && tld != DEFAULT_TLD {
        Some(format!("Unsupported tld '{}'", tld))
    } else if status == StatusCode::OK {
        if lang_check {
            Some("No audio stream in response".to_string())
        } else {
            Some(format!(
                "No audio stream in response. Unsupported language '{}'",
                language
            ))
        }
    } else if status.is_server_error() {
        Some("Upstream API error. Try again later.".to_string())
    } else {
        None
    };

    match cause {
        Some(cause) => format!("{}. Probable cause: {}", premise, cause),
        None => premise,
    }
}

/// Split text into the pieces sent to the provider, one request each.
///
/// Tokens end at punctuation, oversized tokens are cut at the last space
/// (or hard-cut without one) to fit `MAX_CHUNK_CHARS`, and punctuation-only
/// tokens are dropped.
fn split_into_chunks(text: &str) -> Vec<String> {
    tokenize(&preprocess(text))
        .into_iter()
        .map(|token| WHITESPACE.replace_all(&token, " ").trim().to_string())
        .flat_map(|token| minimize(&token, MAX_CHUNK_CHARS))
        .filter(|piece| piece.chars().any(char::is_alphanumeric))
        .collect()
}

/// Join hyphenated line breaks and put a space after tone marks
fn preprocess(text: &str) -> String {
    let joined = text.replace("-\n", "");
    let mut out = String::with_capacity(joined.len());

    for c in joined.chars() {
        out.push(c);
        if TONE_MARKS.contains(&c) {
            out.push(' ');
        }
    }

    out
}

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let next = chars.peek().copied();

        let boundary = if TONE_MARKS.contains(&c) || OTHER_PUNCTUATION.contains(&c) {
            true
        } else if PERIOD_COMMA.contains(&c) {
            next.map_or(true, char::is_whitespace)
        } else if c == ':' {
            !next.is_some_and(|n| n.is_ascii_digit())
        } else {
            false
        };

        if boundary {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Cut a token into pieces of at most `max_chars` characters
fn minimize(token: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = token.trim();

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(index, _)| index);
        let split_at = match rest[..limit].rfind(' ') {
            Some(index) if index > 0 => index,
            _ => limit,
        };

        pieces.push(rest[..split_at].trim_end().to_string());
        rest = rest[split_at..].trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }

    pieces
}
