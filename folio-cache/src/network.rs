//! Network port
//!
//! The worker's only path to the outside world. Injected so the
//! lifecycle logic can run against test doubles and embedders can
//! plug in whatever transport the host provides.

use crate::error::NetworkError;
use crate::http::{Request, Response};
use async_trait::async_trait;

/// Performs the actual network fetch for a request
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<Response, NetworkError>;
}
