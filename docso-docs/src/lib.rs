/// Process-scoped document cache.
pub mod cache;
pub mod error;
/// Documentation retrieval backends.
pub mod fetch;
pub mod lookup;
/// Package documentation model.
pub mod model;

pub use cache::DocumentCache;
pub use error::DocError;
pub use fetch::{DocFetcher, HttpFetcher};
pub use model::{Document, Function, FunctionKind, TypeDoc};
