//! # evoa-cache
//!
//! Key-value caching for feed pages and explore listings.
//!
//! ## Features
//!
//! - **Connection Pool**: managed Redis connection pool with deadpool
//! - **Stores**: `RedisCache`, `NoopCache` (caching disabled) and
//!   `MemoryCache` (single process) behind the `CacheStore` trait
//! - **Facade**: `Cache` serializes values as JSON and turns every store
//!   failure into a logged miss
//! - **Keys**: feed page keys and per-viewer invalidation patterns
//!
//! ## Example
//!
//! ```ignore
//! use evoa_cache::{Cache, RedisCache, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = Cache::new(RedisCache::new(pool));
//!
//! cache.set_json("battleground:live", &reels, Some(300)).await;
//! let hit: Option<Vec<Reel>> = cache.get_json("battleground:live").await;
//! ```

pub mod error;
pub mod facade;
pub mod keys;
pub mod pool;
pub mod store;

pub use error::{CacheError, CacheResult};
pub use facade::{Cache, CacheStatus};
pub use keys::{
    feed_page_key, viewer_feed_pattern, BATTLEGROUND_KEY, TOP_STARTUPS_KEY, WEEKLY_STARTUPS_KEY,
};
pub use pool::{RedisPool, RedisPoolConfig};
pub use store::{CacheStore, MemoryCache, NoopCache, RedisCache};
