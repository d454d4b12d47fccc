//! Comment entity - a comment on a reel, optionally replying to another comment

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::now_micros;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelComment {
    pub id: Uuid,
    pub reel_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ReelComment {
    /// Maximum comment length in characters
    pub const MAX_CONTENT_LENGTH: usize = 2000;

    /// Create a new top-level comment
    pub fn new(reel_id: Uuid, user_id: Uuid, content: String) -> Self {
        let now = now_micros();
        Self {
            id: Uuid::new_v4(),
            reel_id,
            user_id,
            content,
            parent_comment_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Create a reply to another comment
    pub fn new_reply(reel_id: Uuid, user_id: Uuid, content: String, parent_id: Uuid) -> Self {
        Self {
            parent_comment_id: Some(parent_id),
            ..Self::new(reel_id, user_id, content)
        }
    }

    /// Check if comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if this comment can be the parent of a reply on `reel_id`
    pub fn can_parent_reply_on(&self, reel_id: Uuid) -> bool {
        self.reel_id == reel_id && !self.is_deleted()
    }
}
