//! Reaction-driven pagination: sessions, registry, state machine and eviction.

/// Items shown per page.
pub const PAGE_SIZE: usize = 10;
/// Default idle time before the janitor evicts a session.
pub const DEFAULT_IDLE_SECS: u64 = 600;
/// Default period between janitor sweeps.
pub const DEFAULT_SWEEP_SECS: u64 = 60;

pub mod controls;
mod engine;
pub mod janitor;
mod page;
mod registry;
pub mod respond;
mod state;
mod view;

pub use controls::CONTROLS;
pub use engine::{NavigationOutcome, PaginationEngine};
pub use janitor::{ControlSink, JanitorConfig, spawn_janitor, sweep_once};
pub use page::{page_window, total_pages};
pub use registry::{ExpiredSession, PaginationRegistry};
pub use respond::{
    ReactionControls, attach_controls, remove_paginated_message, send_paginated_message,
    update_paginated_message,
};
pub use state::{NavAction, PaginationState, SubjectKind};
pub use view::{RenderedPage, page_indicator, render_page};
