use std::sync::Arc;

use twilight_http::Client;

use docso_docs::DocumentCache;
use docso_utils::pagination::PaginationEngine;

/// Environment-driven runtime configuration.
pub mod config;

pub use config::Config;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub docs: Arc<DocumentCache>,
    pub pages: PaginationEngine,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, docs: Arc<DocumentCache>, pages: PaginationEngine) -> Self {
        Self { http, docs, pages }
    }
}
