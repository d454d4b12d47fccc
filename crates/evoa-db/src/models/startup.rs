//! Startup database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for startups table
#[derive(Debug, Clone, FromRow)]
pub struct StartupModel {
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
