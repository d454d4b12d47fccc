//! Pass-through store used when no cache endpoint is configured

use async_trait::async_trait;

use super::CacheStore;
use crate::error::CacheResult;

/// Store that never retains anything: reads miss, writes succeed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    fn backend(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn delete_matching(&self, _pattern: &str) -> CacheResult<u64> {
        Ok(0)
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}
