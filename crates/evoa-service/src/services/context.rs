//! Service context - dependency container for services
//!
//! Holds the repositories, the cache facade, and the token verifier.

use std::sync::Arc;

use evoa_cache::Cache;
use evoa_common::auth::JwtService;
use evoa_common::FeedConfig;
use evoa_core::traits::{
    CommentRepository, FollowRepository, LikeRepository, ReelRepository, ShareRepository,
    StartupRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    reel_repo: Arc<dyn ReelRepository>,
    like_repo: Arc<dyn LikeRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    share_repo: Arc<dyn ShareRepository>,
    startup_repo: Arc<dyn StartupRepository>,
    follow_repo: Arc<dyn FollowRepository>,

    // Cache
    cache: Cache,
    feed_cache_ttl: u64,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn reel_repo(&self) -> &dyn ReelRepository {
        self.reel_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn share_repo(&self) -> &dyn ShareRepository {
        self.share_repo.as_ref()
    }

    pub fn startup_repo(&self) -> &dyn StartupRepository {
        self.startup_repo.as_ref()
    }

    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    // === Cache ===

    /// Get the cache facade
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// TTL applied to cached feed pages and explore listings, in seconds
    pub fn feed_cache_ttl(&self) -> u64 {
        self.feed_cache_ttl
    }

    // === Identity ===

    /// Get the access-token verifier
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("cache", &self.cache)
            .field("feed_cache_ttl", &self.feed_cache_ttl)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
///
/// The cache defaults to disabled and the TTL to the feed config default.
pub struct ServiceContextBuilder {
    reel_repo: Option<Arc<dyn ReelRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    share_repo: Option<Arc<dyn ShareRepository>>,
    startup_repo: Option<Arc<dyn StartupRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    cache: Option<Cache>,
    feed_cache_ttl: Option<u64>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reel_repo: None,
            like_repo: None,
            comment_repo: None,
            share_repo: None,
            startup_repo: None,
            follow_repo: None,
            cache: None,
            feed_cache_ttl: None,
            jwt_service: None,
        }
    }

    pub fn reel_repo(mut self, repo: Arc<dyn ReelRepository>) -> Self {
        self.reel_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn share_repo(mut self, repo: Arc<dyn ShareRepository>) -> Self {
        self.share_repo = Some(repo);
        self
    }

    pub fn startup_repo(mut self, repo: Arc<dyn StartupRepository>) -> Self {
        self.startup_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn cache(mut self, cache: Cache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn feed_cache_ttl(mut self, seconds: u64) -> Self {
        self.feed_cache_ttl = Some(seconds);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            reel_repo: self.reel_repo.ok_or_else(|| ServiceError::validation("reel_repo is required"))?,
            like_repo: self.like_repo.ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            share_repo: self.share_repo.ok_or_else(|| ServiceError::validation("share_repo is required"))?,
            startup_repo: self
                .startup_repo
                .ok_or_else(|| ServiceError::validation("startup_repo is required"))?,
            follow_repo: self
                .follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            cache: self.cache.unwrap_or_default(),
            feed_cache_ttl: self
                .feed_cache_ttl
                .unwrap_or_else(|| FeedConfig::default().cache_ttl_seconds),
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
