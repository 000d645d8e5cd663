use std::time::Duration;

/// Longest text accepted for a single synthesis, in characters
pub const MAX_TEXT_CHARS: usize = 8000;

/// User-facing message for any provider failure
pub const FAILED_MESSAGE: &str = "Could not generate audio; check connectivity and retry.";

/// User-facing prompt when there is nothing to synthesize
pub const REJECTED_MESSAGE: &str = "Please enter some text to convert.";

/// Validated input handed to the synthesis provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
    pub accent: String,
    pub slow: bool,
}

/// Raw input for one run of the pipeline, as received from the caller
#[derive(Debug, Clone, Default)]
pub struct SynthesisCommand {
    pub text: Option<String>,
    pub filename: Option<String>,
    /// Text remembered for the caller's session, used when `text` is absent
    pub default_text: Option<String>,
    pub language: String,
    pub accent: String,
    pub slow: bool,
}

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio: Vec<u8>,
    pub filename: String,
    /// Characters actually sent to the provider
    pub char_count: usize,
    pub elapsed: Duration,
}

impl SynthesisResult {
    /// Elapsed provider time in seconds, two decimals
    pub fn elapsed_display(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }
}

/// Terminal state of a synthesis run
#[derive(Debug, Clone)]
pub enum SynthesisOutcome {
    /// Input text was empty after trimming; the provider was not called
    Rejected,
    Success(SynthesisResult),
    Failed {
        user_message: String,
        diagnostic: String,
    },
}

impl SynthesisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SynthesisOutcome::Success(_))
    }
}
