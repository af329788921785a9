//! Applies navigation events to registered pagination sessions.

use std::{sync::Arc, time::Instant};

use docso_docs::Document;
use tracing::debug;

use super::registry::PaginationRegistry;
use super::state::{NavAction, PaginationState, SubjectKind};
use super::view::{RenderedPage, render_page};

/// Result of one navigation event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavigationOutcome {
    /// No session for the message: expired or already destroyed.
    Stale,
    /// The actor does not own the session.
    Unauthorized,
    /// Already at the requested bound.
    Unchanged,
    /// The page moved; edit the message in place with this content.
    Rendered(RenderedPage),
    /// The session ended; detach controls from (or remove) the message.
    Destroyed { channel_id: u64 },
}

/// Pagination state machine over a shared [`PaginationRegistry`].
///
/// Transport-agnostic: the caller translates platform events into
/// [`PaginationEngine::handle_navigation`] and performs any message edits.
#[derive(Clone, Default)]
pub struct PaginationEngine {
    registry: PaginationRegistry,
}

impl PaginationEngine {
    pub fn new(registry: PaginationRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PaginationRegistry {
        &self.registry
    }

    /// Create a session on page 1 for a message about to be sent.
    pub fn open(
        &self,
        subject: SubjectKind,
        document: Arc<Document>,
        owner_id: u64,
        channel_id: u64,
    ) -> PaginationState {
        PaginationState::new(subject, document, owner_id, channel_id, Instant::now())
    }

    /// Track a session under the id of the message that displays it.
    pub async fn register(&self, message_id: u64, state: PaginationState) {
        debug!(
            message_id,
            owner_id = state.owner_id(),
            page_limit = state.page_limit(),
            "registered pagination session"
        );
        self.registry.insert(message_id, state).await;
    }

    pub async fn handle_navigation(
        &self,
        message_id: u64,
        actor_id: u64,
        action: NavAction,
    ) -> NavigationOutcome {
        self.handle_navigation_at(message_id, actor_id, action, Instant::now())
            .await
    }

    pub(crate) async fn handle_navigation_at(
        &self,
        message_id: u64,
        actor_id: u64,
        action: NavAction,
        now: Instant,
    ) -> NavigationOutcome {
        let mut sessions = self.registry.lock().await;

        let Some(state) = sessions.get_mut(&message_id) else {
            return NavigationOutcome::Stale;
        };

        if state.owner_id() != actor_id {
            return NavigationOutcome::Unauthorized;
        }

        if action == NavAction::Destroy {
            let channel_id = state.channel_id();
            sessions.remove(&message_id);
            debug!(message_id, "pagination session destroyed");
            return NavigationOutcome::Destroyed { channel_id };
        }

        if !state.step(action, now) {
            return NavigationOutcome::Unchanged;
        }

        NavigationOutcome::Rendered(render_page(state))
    }
}
