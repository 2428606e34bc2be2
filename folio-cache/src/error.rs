//! Error types for the offline cache worker

use thiserror::Error;

/// Result type alias using CacheError
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors from cache storage and the worker lifecycle
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Install rejected response for {url}: status {status}")]
    InstallRejected { url: String, status: u16 },
}

/// Errors from the underlying network fetch
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Fetch failed for {url}: {reason}")]
    Failed { url: String, reason: String },
}

impl NetworkError {
    /// Convenience constructor for fetch failures
    pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
