pub mod google_translate_tts_repository;
pub mod session_repository;
pub mod tts_repository;

pub use google_translate_tts_repository::{GoogleTranslateTtsConfig, GoogleTranslateTtsRepository};
pub use session_repository::SessionRepository;
pub use tts_repository::TtsRepository;
