//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every reel read excludes soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Follow, Reel, ReelComment, ReelLike, ReelShare, Startup};
use crate::error::DomainError;
use crate::value_objects::FeedCursor;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Parameters for a single feed window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Only rows strictly after this boundary
    pub cursor: Option<FeedCursor>,
    /// Restrict to reels of these startups (`None` means every startup)
    pub startup_ids: Option<Vec<Uuid>>,
    /// Maximum number of rows to return
    pub limit: i64,
}

impl FeedQuery {
    pub fn new(cursor: Option<FeedCursor>, limit: i64) -> Self {
        Self {
            cursor,
            startup_ids: None,
            limit,
        }
    }

    /// Restrict the window to the given startups
    pub fn from_startups(mut self, startup_ids: Vec<Uuid>) -> Self {
        self.startup_ids = Some(startup_ids);
        self
    }

    /// Check whether a reel satisfies the query's filters
    pub fn matches(&self, reel: &Reel) -> bool {
        reel.is_live()
            && self
                .cursor
                .map_or(true, |c| c.admits(reel.created_at, reel.id))
            && self
                .startup_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&reel.startup_id))
    }
}

// ============================================================================
// Reel Repository
// ============================================================================

#[async_trait]
pub trait ReelRepository: Send + Sync {
    /// Find a live reel by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reel>>;

    /// Fetch live reels ordered `created_at DESC, id DESC`
    async fn find_feed(&self, query: &FeedQuery) -> RepoResult<Vec<Reel>>;

    /// Fetch live featured reels ordered by like count
    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Reel>>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Check whether the user has liked the reel
    async fn exists(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Subset of `reel_ids` the user has liked
    async fn find_liked_reel_ids(&self, user_id: Uuid, reel_ids: &[Uuid]) -> RepoResult<Vec<Uuid>>;

    /// Insert the like and increment the reel's like counter atomically
    ///
    /// Returns `ReelAlreadyLiked` when the pair already exists.
    async fn create(&self, like: &ReelLike) -> RepoResult<()>;

    /// Delete the like and decrement the reel's like counter atomically
    ///
    /// Returns `LikeNotFound` when there is nothing to delete.
    async fn delete(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a live comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ReelComment>>;

    /// Live top-level comments of a reel, newest first
    async fn find_top_level_by_reel(&self, reel_id: Uuid) -> RepoResult<Vec<ReelComment>>;

    /// Insert the comment and increment the reel's comment counter atomically
    async fn create(&self, comment: &ReelComment) -> RepoResult<()>;
}

// ============================================================================
// Share Repository
// ============================================================================

#[async_trait]
pub trait ShareRepository: Send + Sync {
    /// Insert the share and increment the reel's share counter atomically
    async fn create(&self, share: &ReelShare) -> RepoResult<()>;
}

// ============================================================================
// Startup Repository
// ============================================================================

#[async_trait]
pub trait StartupRepository: Send + Sync {
    /// Find a live startup by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>>;

    /// Live startups among `ids`, in no particular order
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Startup>>;

    /// Live startups with the most followers
    async fn find_top_by_followers(&self, limit: i64) -> RepoResult<Vec<Startup>>;

    /// Live startups created at or after `since`, most followers first
    async fn find_recent_by_followers(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Startup>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether the user follows the startup
    async fn exists(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<bool>;

    /// IDs of every startup the user follows
    async fn find_followed_startup_ids(&self, follower_id: Uuid) -> RepoResult<Vec<Uuid>>;

    /// Startups the user follows, most recent follow first
    async fn find_followed_startups(&self, follower_id: Uuid) -> RepoResult<Vec<Startup>>;

    /// Insert the follow and increment the startup's follower counter atomically
    ///
    /// Returns `AlreadyFollowing` when the pair already exists.
    async fn create(&self, follow: &Follow) -> RepoResult<()>;

    /// Delete the follow and decrement the startup's follower counter atomically
    ///
    /// Returns `FollowNotFound` when there is nothing to delete.
    async fn delete(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<()>;
}
