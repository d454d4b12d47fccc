//! Like entity - a viewer's like on a reel

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::now_micros;

/// Like membership record, unique per (reel, user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelLike {
    pub id: Uuid,
    pub reel_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ReelLike {
    /// Create a new ReelLike
    pub fn new(reel_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            reel_id,
            user_id,
            created_at: now_micros(),
        }
    }
}
