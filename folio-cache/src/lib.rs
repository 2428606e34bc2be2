//! Folio Cache Library
//!
//! The offline cache worker for the Folio reading application:
//! install-time shell pre-caching, cache-first fetch serving with
//! network fallback, and activate-time eviction of stale cache
//! generations. Runs in its own execution context and communicates
//! with the page only through intercepted requests and responses.

pub mod error;
pub mod http;
pub mod manifest;
pub mod network;
pub mod storage;
pub mod worker;

pub use error::{CacheError, NetworkError, Result};
pub use http::{Request, RequestMode, Response, ResponseKind};
pub use manifest::{CacheManifest, CACHE_NAME};
pub use network::Network;
pub use storage::{Cache, CacheStorage, MemoryCacheStorage};
pub use worker::CacheWorker;
