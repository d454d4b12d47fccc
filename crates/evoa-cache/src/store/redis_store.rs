//! Redis-backed cache store

use async_trait::async_trait;

use super::CacheStore;
use crate::error::CacheResult;
use crate::pool::RedisPool;

/// Cache store over a shared Redis pool
#[derive(Debug, Clone)]
pub struct RedisCache {
    pool: RedisPool,
}

impl RedisCache {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    fn backend(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.pool.get_string(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.pool.set_string(key, value, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.pool.delete(key).await.map(|_| ())
    }

    async fn delete_matching(&self, pattern: &str) -> CacheResult<u64> {
        let keys = self.pool.scan_keys(pattern).await?;
        self.pool.delete_many(&keys).await
    }

    async fn ping(&self) -> CacheResult<()> {
        self.pool.health_check().await
    }
}
