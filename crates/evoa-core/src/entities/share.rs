//! Share entity - append-only record of a reel being shared

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::now_micros;

/// Share entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelShare {
    pub id: Uuid,
    pub reel_id: Uuid,
    pub user_id: Uuid,
    pub platform: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReelShare {
    /// Maximum platform label length
    pub const MAX_PLATFORM_LENGTH: usize = 50;

    /// Create a new ReelShare
    pub fn new(reel_id: Uuid, user_id: Uuid, platform: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            reel_id,
            user_id,
            platform,
            created_at: now_micros(),
        }
    }
}
