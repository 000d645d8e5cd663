use serde::Serialize;

/// One selectable entry of a voice parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    pub code: &'static str,
    pub label: &'static str,
}

const fn option(code: &'static str, label: &'static str) -> VoiceOption {
    VoiceOption { code, label }
}

/// Languages offered to clients (ISO 639-1)
pub const LANGUAGE_OPTIONS: &[VoiceOption] = &[
    option("es", "Español"),
    option("en", "English"),
    option("pt", "Português"),
    option("fr", "Français"),
    option("it", "Italiano"),
    option("de", "Deutsch"),
    option("ja", "日本語 (Japanese)"),
    option("ko", "한국어 (Korean)"),
];

/// Provider domain hints that nudge the accent.
///
/// Not every hint affects every language. `com` appears twice on purpose:
/// neutral and US English share the same domain.
pub const ACCENT_OPTIONS: &[VoiceOption] = &[
    option("com", "Neutro (com)"),
    option("es", "España (es)"),
    option("com.mx", "México (com.mx)"),
    option("com.co", "Colombia (com.co)"),
    option("com.ar", "Argentina (com.ar)"),
    option("com", "Estados Unidos (com)"),
    option("co.uk", "Reino Unido (co.uk)"),
    option("com.br", "Brasil (com.br)"),
    option("co.jp", "Japón (co.jp)"),
];

pub const DEFAULT_LANGUAGE: &str = "es";
pub const DEFAULT_ACCENT: &str = "com";
