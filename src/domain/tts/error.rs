/// Any failure of the synthesis provider.
///
/// Network errors, unsupported language/accent combinations, provider outages
/// and malformed responses all collapse into this one error; the provider does
/// not reliably tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct SynthesisError {
    detail: String,
}

impl SynthesisError {
    pub fn new(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if detail.trim().is_empty() {
            "unknown synthesis provider error".to_string()
        } else {
            detail
        };
        Self { detail }
    }

    /// Raw provider diagnostic, for debug display only
    pub fn detail(&self) -> &str {
        &self.detail
    }
}
