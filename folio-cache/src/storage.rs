//! Cache storage abstraction
//!
//! Named cache generations holding URL-keyed responses. The worker
//! talks to storage only through these traits so tests and embeddings
//! can supply their own backends.

use crate::error::{CacheError, Result};
use crate::http::{Request, Response};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A collection of named cache generations
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Open the cache with the given name, creating it if absent
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>>;

    /// Names of all existing cache generations
    async fn keys(&self) -> Result<Vec<String>>;

    /// Delete the named generation; returns whether it existed
    async fn delete(&self, name: &str) -> Result<bool>;
}

/// One cache generation: URL-keyed request/response pairs
#[async_trait]
pub trait Cache: Send + Sync {
    /// Look up a stored response matching the request's URL
    async fn lookup(&self, request: &Request) -> Result<Option<Response>>;

    /// Store a copy of the response under the request's URL
    async fn put(&self, request: &Request, response: &Response) -> Result<()>;
}

/// In-process cache storage backed by hash maps
#[derive(Default)]
pub struct MemoryCacheStorage {
    caches: RwLock<HashMap<String, Arc<MemoryCache>>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>> {
        let mut caches = self
            .caches
            .write()
            .map_err(|_| CacheError::Backend("cache index lock poisoned".to_string()))?;
        let cache = caches
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCache::default()));
        Ok(Arc::clone(cache) as Arc<dyn Cache>)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let caches = self
            .caches
            .read()
            .map_err(|_| CacheError::Backend("cache index lock poisoned".to_string()))?;
        Ok(caches.keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let mut caches = self
            .caches
            .write()
            .map_err(|_| CacheError::Backend("cache index lock poisoned".to_string()))?;
        Ok(caches.remove(name).is_some())
    }
}

/// One in-memory generation
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Response>>,
}

#[async_trait]
impl Cache for MemoryCache {
    async fn lookup(&self, request: &Request) -> Result<Option<Response>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CacheError::Backend("cache lock poisoned".to_string()))?;
        Ok(entries.get(&request.url).cloned())
    }

    async fn put(&self, request: &Request, response: &Response) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::Backend("cache lock poisoned".to_string()))?;
        entries.insert(request.url.clone(), response.clone());
        Ok(())
    }
}
