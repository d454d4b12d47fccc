//! # evoa-service
//!
//! Application layer containing the feed assembler, engagement services,
//! and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CommentResponse, CreateCommentRequest, FeedPageResponse, HealthChecks, HealthResponse,
    MessageResponse, ReadinessResponse, ReelResponse, ReelView, ShareReelRequest,
    StartupResponse, StartupSummary,
};
pub use services::{
    EngagementService, ExploreService, FeedService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StartupService,
};
