//! Reel database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reels table
#[derive(Debug, Clone, FromRow)]
pub struct ReelModel {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
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

impl ReelModel {
    /// Column list shared by every reel query
    pub const COLUMNS: &'static str = "r.id, r.startup_id, r.title, r.description, r.video_url, \
         r.thumbnail_url, r.duration, r.view_count, r.like_count, r.comment_count, \
         r.share_count, r.hashtags, r.is_featured, r.created_at, r.updated_at, r.deleted_at";
}
