use crate::domain::session::SessionDraft;
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// In-memory store of session drafts.
///
/// Entries expire after `idle` without reads or writes; nothing is persisted.
pub struct SessionRepository {
    cache: Cache<Uuid, SessionDraft>,
}

impl SessionRepository {
    pub fn new(max_capacity: u64, idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(idle)
            .build();

        Self { cache }
    }

    /// Find a session draft by ID
    pub async fn find_by_id(&self, session_id: Uuid) -> Option<SessionDraft> {
        self.cache.get(&session_id).await
    }

    /// Insert or replace a session draft
    pub async fn save(&self, draft: SessionDraft) {
        self.cache.insert(draft.id, draft).await;
    }

    /// Approximate number of live sessions
    pub fn count(&self) -> u64 {
        self.cache.entry_count()
    }
}
