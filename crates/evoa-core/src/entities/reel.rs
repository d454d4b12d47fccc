//! Reel entity - a short pitch video published by a startup

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{now_micros, FeedCursor};

/// Reel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reel {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    /// Length in seconds
    pub duration: Option<i32>,
    pub view_count: i32,
    pub like_count: i32,
    pub comment_count: i32,
    pub share_count: i32,
    pub hashtags: Vec<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Reel {
    /// Create a new Reel with zeroed counters
    pub fn new(id: Uuid, startup_id: Uuid, title: String, video_url: String) -> Self {
        let now = now_micros();
        Self {
            id,
            startup_id,
            title,
            description: None,
            video_url,
            thumbnail_url: None,
            duration: None,
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            share_count: 0,
            hashtags: Vec::new(),
            is_featured: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the reel has been soft-deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the reel is visible on read paths
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.is_deleted()
    }

    /// Bare cursor pointing just past this reel
    pub fn cursor(&self) -> FeedCursor {
        FeedCursor::before(self.created_at)
    }

    /// Compound cursor pointing just past this reel, for boundaries inside a
    /// run of equal timestamps
    pub fn tie_cursor(&self) -> FeedCursor {
        FeedCursor::before_row(self.created_at, self.id)
    }

    /// Check whether the reel was published by the given startup
    #[inline]
    pub fn is_from(&self, startup_id: Uuid) -> bool {
        self.startup_id == startup_id
    }
}
