//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::CursorParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reel not found: {0}")]
    ReelNotFound(Uuid),

    #[error("Startup not found: {0}")]
    StartupNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Like not found")]
    LikeNotFound,

    #[error("Not following this startup")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(#[from] CursorParseError),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reel already liked")]
    ReelAlreadyLiked,

    #[error("Already following this startup")]
    AlreadyFollowing,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ReelNotFound(_) => "UNKNOWN_REEL",
            Self::StartupNotFound(_) => "UNKNOWN_STARTUP",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::LikeNotFound => "UNKNOWN_LIKE",
            Self::FollowNotFound => "NOT_FOLLOWING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidCursor(_) => "INVALID_CURSOR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::ReelAlreadyLiked => "ALREADY_LIKED",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReelNotFound(_)
                | Self::StartupNotFound(_)
                | Self::CommentNotFound(_)
                | Self::LikeNotFound
                | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidCursor(_) | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReelAlreadyLiked | Self::AlreadyFollowing)
    }
}
