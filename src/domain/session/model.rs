use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sample text a session can copy into its draft
pub const SAMPLE_TEXT: &str = concat!(
    "¡Ay! —dijo el ratón—. El mundo se hace cada día más pequeño. ",
    "Al principio era tan grande que le tenía miedo. ",
    "Corría y corría, y me alegraba ver esos muros, a diestra y siniestra, en la distancia. ",
    "Pero esas paredes se estrechan tan rápido que me encuentro en el último cuarto y, ",
    "en el rincón, está la trampa sobre la cual debo pasar. ",
    "—Todo lo que debes hacer es cambiar de rumbo —dijo el gato… y se lo comió. ",
    "Franz Kafka."
);

/// Editor state remembered for one client session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub id: Uuid,
    pub text: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SessionDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_text(self, text: Option<String>) -> Self {
        Self {
            text,
            updated_at: Utc::now(),
            ..self
        }
    }
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self::new()
    }
}
