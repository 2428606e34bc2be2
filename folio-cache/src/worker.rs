//! The cache worker lifecycle: install, fetch, activate
//!
//! Each lifecycle method is an independent future triggered by the
//! hosting runtime; its completion is the signal that the event's
//! asynchronous work is done (the runtime holds activation until
//! install completes, and serves from the new generation only after
//! activate completes). The worker shares no state with the page:
//! requests in, responses out.

use crate::error::{CacheError, Result};
use crate::http::{Request, Response};
use crate::manifest::CacheManifest;
use crate::network::Network;
use crate::storage::CacheStorage;
use std::sync::Arc;

/// The offline cache worker
pub struct CacheWorker {
    storage: Arc<dyn CacheStorage>,
    network: Arc<dyn Network>,
    manifest: CacheManifest,
}

impl CacheWorker {
    pub fn new(
        storage: Arc<dyn CacheStorage>,
        network: Arc<dyn Network>,
        manifest: CacheManifest,
    ) -> Self {
        Self {
            storage,
            network,
            manifest,
        }
    }

    /// The manifest this worker serves
    pub fn manifest(&self) -> &CacheManifest {
        &self.manifest
    }

    /// Install: pre-cache the entire application shell.
    ///
    /// All-or-nothing: every manifest URL is fetched before anything is
    /// stored, so one unreachable asset leaves no partial generation
    /// behind and the install error keeps this worker from activating.
    pub async fn install(&self) -> Result<()> {
        let mut fetched = Vec::with_capacity(self.manifest.urls.len());
        for url in &self.manifest.urls {
            let request = Request::get(url.clone());
            let response = self.network.fetch(&request).await?;
            if !(200..300).contains(&response.status) {
                return Err(CacheError::InstallRejected {
                    url: url.clone(),
                    status: response.status,
                });
            }
            fetched.push((request, response));
        }

        let cache = self.storage.open(&self.manifest.cache_name).await?;
        for (request, response) in &fetched {
            cache.put(request, response).await?;
        }

        tracing::info!(
            cache = %self.manifest.cache_name,
            assets = fetched.len(),
            "installed shell cache"
        );
        Ok(())
    }

    /// Fetch: serve an intercepted request, cache-first.
    ///
    /// A cached match is returned verbatim without touching the
    /// network. On a miss, the network response is served; successful
    /// same-origin responses get a copy stored first, but a storage
    /// failure never blocks the response. When the network itself
    /// fails, navigations fall back to the cached root document;
    /// other requests get `None`.
    ///
    /// Matching is deliberately narrowed to the current generation
    /// rather than searching all caches: activate deletes every other
    /// generation, so entries elsewhere are already condemned and
    /// serving them would resurrect stale shell assets during the
    /// brief install-to-activate window.
    pub async fn handle_fetch(&self, request: &Request) -> Result<Option<Response>> {
        let cache = self.storage.open(&self.manifest.cache_name).await?;

        if let Some(hit) = cache.lookup(request).await? {
            tracing::debug!(url = %request.url, "cache hit");
            return Ok(Some(hit));
        }

        match self.network.fetch(request).await {
            Ok(response) => {
                if response.is_cacheable() {
                    if let Err(e) = cache.put(request, &response).await {
                        tracing::warn!(url = %request.url, "failed to cache response: {e}");
                    }
                }
                Ok(Some(response))
            }
            Err(e) => {
                tracing::debug!(url = %request.url, "network fetch failed: {e}");
                if request.is_navigation() {
                    let fallback = Request::get(self.manifest.navigation_fallback());
                    cache.lookup(&fallback).await
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Activate: evict every stale cache generation.
    ///
    /// Deletes each existing cache whose name differs from the current
    /// generation. This is the sole eviction mechanism for superseded
    /// shell assets after a deploy.
    pub async fn activate(&self) -> Result<()> {
        for name in self.storage.keys().await? {
            if name != self.manifest.cache_name {
                self.storage.delete(&name).await?;
                tracing::info!(cache = %name, "deleted stale cache generation");
            }
        }
        Ok(())
    }
}
