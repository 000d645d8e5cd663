pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{SessionResponse, UpdateSessionTextRequest};
pub use error::SessionServiceError;
pub use model::{SessionDraft, SAMPLE_TEXT};
pub use service::{SessionService, SessionServiceApi};
