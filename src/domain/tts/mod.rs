pub mod dto;
pub mod error;
pub mod model;
pub mod naming;
pub mod normalizer;
pub mod options;
pub mod service;

pub use dto::{OptionsResponse, TtsRequest};
pub use error::SynthesisError;
pub use model::{
    SynthesisCommand, SynthesisOutcome, SynthesisRequest, SynthesisResult, FAILED_MESSAGE,
    MAX_TEXT_CHARS, REJECTED_MESSAGE,
};
pub use naming::{make_filename, Clock, SystemClock};
pub use normalizer::{normalize, sanitize_filename, NormalizedInput};
pub use service::{TtsService, TtsServiceApi};
