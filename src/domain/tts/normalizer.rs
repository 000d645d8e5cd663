/// Characters reserved on common filesystems
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Longest stem kept after sanitizing, in characters
pub const MAX_STEM_CHARS: usize = 50;

/// How much of the text becomes the stem when no filename is given
const TEXT_STEM_CHARS: usize = 20;

pub const DEFAULT_STEM: &str = "audio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    pub clean_text: String,
    pub stem: String,
}

/// Trim the text and derive a filename stem for it.
///
/// `raw_text` wins over `default_text` whenever it is present, even if empty.
/// Returns `None` when there is nothing left to synthesize after trimming.
pub fn normalize(
    raw_text: Option<&str>,
    raw_filename: Option<&str>,
    default_text: Option<&str>,
) -> Option<NormalizedInput> {
    let clean_text = raw_text.or(default_text).unwrap_or_default().trim();
    if clean_text.is_empty() {
        return None;
    }

    let stem = match raw_filename.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => clean_text.chars().take(TEXT_STEM_CHARS).collect(),
    };

    Some(NormalizedInput {
        clean_text: clean_text.to_string(),
        stem: sanitize_filename(&stem),
    })
}

/// Replace reserved characters with `_` and cap the length.
pub fn sanitize_filename(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { DEFAULT_STEM } else { name };

    name.chars()
        .map(|c| if ILLEGAL_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_STEM_CHARS)
        .collect()
}
