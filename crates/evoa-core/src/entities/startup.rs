//! Startup entity - the company that publishes reels

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::now_micros;

/// Startup entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub id: Uuid,
    pub founder_id: Uuid,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub follower_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Startup {
    /// Create a new Startup
    pub fn new(id: Uuid, founder_id: Uuid, name: String) -> Self {
        let now = now_micros();
        Self {
            id,
            founder_id,
            name,
            tagline: None,
            description: None,
            industry: None,
            stage: None,
            website: None,
            logo_url: None,
            follower_count: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if user founded this startup
    #[inline]
    pub fn is_founder(&self, user_id: Uuid) -> bool {
        self.founder_id == user_id
    }
}
