//! Follow entity - a user following a startup

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::now_micros;

/// Follow membership record, unique per (follower, startup)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub startup_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Uuid, startup_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower_id,
            startup_id,
            created_at: now_micros(),
        }
    }
}
