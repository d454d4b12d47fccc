//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Reel Requests
// ============================================================================

/// Comment on a reel, optionally as a reply
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,

    /// Comment being replied to; must belong to the same reel
    #[serde(default)]
    pub parent_comment_id: Option<Uuid>,
}

/// Share a reel
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ShareReelRequest {
    #[validate(length(max = 50, message = "Platform must be at most 50 characters"))]
    #[serde(default)]
    pub platform: Option<String>,
}
