use chrono::{DateTime, Local};

/// Local time, one-second resolution
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const AUDIO_EXTENSION: &str = "mp3";

/// Source of the current instant used for output filenames
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Build `{stem}_{YYYYMMDD_HHMMSS}.mp3`.
///
/// Two calls within the same second with the same stem produce the same name.
pub fn make_filename(stem: &str, clock: &dyn Clock) -> String {
    format!(
        "{}_{}.{}",
        stem,
        clock.now().format(TIMESTAMP_FORMAT),
        AUDIO_EXTENSION
    )
}
