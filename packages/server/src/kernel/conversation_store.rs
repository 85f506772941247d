//! In-process table of drafts awaiting human review.
//!
//! `/generate` parks a run's state here under a fresh id; `/post` takes it back
//! out. Taking removes the entry, so each id can be resumed at most once.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use crate::domains::agent::models::WorkflowState;

struct Entry {
    state: WorkflowState,
    inserted_at: Instant,
}

/// Thread-safe, cloneable. Every clone shares the same table.
#[derive(Clone, Default)]
pub struct ConversationStore {
    entries: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: Option<Duration>,
}

impl ConversationStore {
    /// A store whose entries never expire.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
        }
    }

    /// Park a state and return its new id. Expired entries are purged first.
    pub async fn insert(&self, state: WorkflowState) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();

        let mut entries = self.entries.lock().await;
        if let Some(ttl) = self.ttl {
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) < ttl);
        }
        entries.insert(
            id,
            Entry {
                state,
                inserted_at: now,
            },
        );
        id
    }

    /// Remove and return the state for `id`. Expired entries count as absent.
    pub async fn take(&self, id: &Uuid) -> Option<WorkflowState> {
        let entry = self.entries.lock().await.remove(id)?;

        match self.ttl {
            Some(ttl) if entry.inserted_at.elapsed() >= ttl => {
                tracing::debug!(conversation_id = %id, "Conversation expired");
                None
            }
            _ => Some(entry.state),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
