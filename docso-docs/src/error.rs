use thiserror::Error;

/// Failure modes of documentation retrieval.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocError {
    /// The mirror has no documentation for the package.
    #[error("no documentation found for package `{0}`")]
    NotFound(String),
    /// Retrieval failed (network, timeout, malformed payload).
    #[error("failed to fetch documentation for package `{package}`: {reason}")]
    Fetch { package: String, reason: String },
}

impl DocError {
    pub fn fetch(package: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            package: package.to_owned(),
            reason: reason.to_string(),
        }
    }
}
