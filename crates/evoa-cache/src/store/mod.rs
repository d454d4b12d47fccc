//! Cache stores - interchangeable key-value backends
//!
//! Stores deal in raw strings; serialization lives in the `Cache` facade.

mod glob;
mod memory;
mod noop;
mod redis_store;

use async_trait::async_trait;

use crate::error::CacheResult;

pub(crate) use glob::glob_match;
pub use memory::MemoryCache;
pub use noop::NoopCache;
pub use redis_store::RedisCache;

/// Key-value cache backend
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Whether the store actually retains values
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value, expiring after `ttl_seconds` when given
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Delete every key matching a glob pattern (`*` and `?`), returning the count
    async fn delete_matching(&self, pattern: &str) -> CacheResult<u64>;

    /// Check connectivity
    async fn ping(&self) -> CacheResult<()>;
}
