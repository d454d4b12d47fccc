//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (and cached feed pages)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCommentRequest, ShareReelRequest};

pub use responses::{
    CommentResponse, FeedPageResponse, HealthChecks, HealthResponse, MessageResponse,
    ReadinessResponse, ReelResponse, ReelView, StartupResponse, StartupSummary,
};
