//! Shared map from message id to its pagination session.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::{Mutex, MutexGuard};

use super::state::PaginationState;

type SessionMap = HashMap<u64, PaginationState>;

/// A session removed for inactivity; its message still carries controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExpiredSession {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Registry of live pagination sessions, keyed by message id.
///
/// A key is present exactly while its message has navigation controls
/// attached. Cheap to clone; clones share the same map. The lock is only
/// held for in-memory reads and writes.
#[derive(Clone, Default)]
pub struct PaginationRegistry {
    sessions: Arc<Mutex<SessionMap>>,
}

impl PaginationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, message_id: u64, state: PaginationState) -> Option<PaginationState> {
        self.sessions.lock().await.insert(message_id, state)
    }

    pub async fn remove(&self, message_id: u64) -> Option<PaginationState> {
        self.sessions.lock().await.remove(&message_id)
    }

    pub async fn contains(&self, message_id: u64) -> bool {
        self.sessions.lock().await.contains_key(&message_id)
    }

    /// Copy of a session's current state.
    pub async fn get(&self, message_id: u64) -> Option<PaginationState> {
        self.sessions.lock().await.get(&message_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Remove every session idle for at least `threshold` as of `now`.
    pub async fn sweep_idle(&self, now: Instant, threshold: Duration) -> Vec<ExpiredSession> {
        let mut sessions = self.sessions.lock().await;
        let mut expired = Vec::new();

        sessions.retain(|&message_id, state| {
            if state.is_idle(now, threshold) {
                expired.push(ExpiredSession {
                    channel_id: state.channel_id(),
                    message_id,
                });
                false
            } else {
                true
            }
        });

        expired
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, SessionMap> {
        self.sessions.lock().await
    }
}

#[cfg(test)]
mod tests {
    use docso_docs::Document;

    use super::*;
    use crate::pagination::SubjectKind;

    fn session(channel_id: u64, last_activity: Instant) -> PaginationState {
        PaginationState::new(
            SubjectKind::Functions,
            Arc::new(Document::default()),
            1,
            channel_id,
            last_activity,
        )
    }

    #[tokio::test]
    async fn clones_share_sessions() {
        let registry = PaginationRegistry::new();
        let clone = registry.clone();

        registry.insert(10, session(1, Instant::now())).await;

        assert!(clone.contains(10).await);
        assert_eq!(clone.remove(10).await.map(|state| state.channel_id()), Some(1));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn sweep_removes_only_idle_sessions() {
        let registry = PaginationRegistry::new();
        let start = Instant::now();
        let threshold = Duration::from_secs(600);

        registry.insert(1, session(100, start)).await;
        registry
            .insert(2, session(200, start + Duration::from_secs(300)))
            .await;

        let now = start + threshold;
        let expired = registry.sweep_idle(now, threshold).await;

        assert_eq!(
            expired,
            vec![ExpiredSession {
                channel_id: 100,
                message_id: 1
            }]
        );
        assert!(!registry.contains(1).await);
        assert!(registry.contains(2).await);
    }

    #[tokio::test]
    async fn repeated_sweeps_leave_fresh_sessions_alone() {
        let registry = PaginationRegistry::new();
        let start = Instant::now();
        let threshold = Duration::from_secs(600);
        registry.insert(1, session(100, start)).await;

        for seconds in [0, 60, 300, 599] {
            let expired = registry
                .sweep_idle(start + Duration::from_secs(seconds), threshold)
                .await;
            assert!(expired.is_empty());
        }

        assert_eq!(registry.len().await, 1);
    }
}
