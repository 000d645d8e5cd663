use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Longest idle period a session cache accepts
const MAX_SESSION_IDLE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // TTS provider
    pub tts_base_url: Option<String>,
    pub tts_timeout_secs: u64,
    pub tts_lang_check: bool,
    // Session drafts
    pub session_idle_minutes: u64,
    pub session_max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            tts_base_url: env::var("TTS_BASE_URL").ok().filter(|url| !url.trim().is_empty()),
            tts_timeout_secs: env::var("TTS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            tts_lang_check: env::var("TTS_LANG_CHECK")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(true),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            session_max_capacity: env::var("SESSION_MAX_CAPACITY")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn tts_timeout(&self) -> Duration {
        Duration::from_secs(self.tts_timeout_secs)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_minutes.saturating_mul(60)).min(MAX_SESSION_IDLE)
    }
}
