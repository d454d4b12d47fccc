//! Cache facade
//!
//! Wraps whichever `CacheStore` was selected at startup. Values are stored as
//! JSON. Store and decode failures are logged at `warn` and degrade to a
//! miss (reads) or a no-op (writes), so the cache never fails a request.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::{CacheStore, NoopCache};

/// Cache health as reported by readiness probes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Healthy,
    Unhealthy,
    Disabled,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Disabled => "disabled",
        }
    }
}

/// Shared, cheaply clonable cache handle
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn CacheStore>,
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("backend", &self.store.backend())
            .finish()
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Cache {
    pub fn new(store: impl CacheStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Cache that never retains anything
    pub fn disabled() -> Self {
        Self::new(NoopCache)
    }

    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_enabled()
    }

    /// Read and decode a value; any failure is a miss
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "cache miss");
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "discarding undecodable cache entry");
                self.delete(key).await;
                None
            }
        }
    }

    /// Encode and store a value; failures are logged and ignored
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl_seconds: Option<u64>) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "cache value serialization failed");
                return;
            }
        };

        if let Err(e) = self.store.set(key, &raw, ttl_seconds).await {
            warn!(key, error = %e, "cache write failed");
        }
    }

    pub async fn delete(&self, key: &str) {
        if let Err(e) = self.store.delete(key).await {
            warn!(key, error = %e, "cache delete failed");
        }
    }

    /// Delete every key matching a glob pattern; returns how many were removed
    pub async fn delete_matching(&self, pattern: &str) -> u64 {
        match self.store.delete_matching(pattern).await {
            Ok(removed) => {
                debug!(pattern, removed, "cache keys invalidated");
                removed
            }
            Err(e) => {
                warn!(pattern, error = %e, "cache invalidation failed");
                0
            }
        }
    }

    pub async fn status(&self) -> CacheStatus {
        if !self.is_enabled() {
            return CacheStatus::Disabled;
        }
        match self.store.ping().await {
            Ok(()) => CacheStatus::Healthy,
            Err(e) => {
                warn!(error = %e, "cache health check failed");
                CacheStatus::Unhealthy
            }
        }
    }
}
