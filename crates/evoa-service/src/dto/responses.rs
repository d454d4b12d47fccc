//! Response DTOs for API endpoints
//!
//! Feed pages are also the cache payload, so the feed types derive
//! `Deserialize` as well.

use chrono::{DateTime, Utc};
use evoa_cache::CacheStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Reel Responses
// ============================================================================

/// Reel as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelResponse {
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
    /// Owning startup; `None` when it is no longer live
    #[serde(default)]
    pub startup: Option<StartupSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name and logo of the startup that posted a reel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSummary {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Reel annotated with the viewer's like state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelView {
    #[serde(flatten)]
    pub reel: ReelResponse,
    pub is_liked: bool,
}

/// One page of a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPageResponse {
    pub reels: Vec<ReelView>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl FeedPageResponse {
    pub fn empty() -> Self {
        Self {
            reels: Vec::new(),
            next_cursor: None,
            has_more: false,
        }
    }
}

/// Comment as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub reel_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Startup Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupResponse {
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
}

// ============================================================================
// Generic Responses
// ============================================================================

/// Acknowledgement body for mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub cache: String,
}

impl ReadinessResponse {
    /// Gated on the database alone; the cache status is informational
    pub fn ready(database_healthy: bool, cache: CacheStatus) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                cache: cache.as_str().to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
