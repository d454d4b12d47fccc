//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use evoa_core::entities::{Reel, ReelComment, Startup};

use super::responses::{CommentResponse, ReelResponse, ReelView, StartupResponse, StartupSummary};

impl From<&Reel> for ReelResponse {
    fn from(reel: &Reel) -> Self {
        Self {
            id: reel.id,
            startup_id: reel.startup_id,
            title: reel.title.clone(),
            description: reel.description.clone(),
            video_url: reel.video_url.clone(),
            thumbnail_url: reel.thumbnail_url.clone(),
            duration: reel.duration,
            view_count: reel.view_count,
            like_count: reel.like_count,
            comment_count: reel.comment_count,
            share_count: reel.share_count,
            hashtags: reel.hashtags.clone(),
            is_featured: reel.is_featured,
            startup: None,
            created_at: reel.created_at,
            updated_at: reel.updated_at,
        }
    }
}

impl From<Reel> for ReelResponse {
    fn from(reel: Reel) -> Self {
        Self::from(&reel)
    }
}

impl ReelResponse {
    /// Attach the owning startup's summary
    #[must_use]
    pub fn with_startup(mut self, startup: Option<StartupSummary>) -> Self {
        self.startup = startup;
        self
    }
}

impl ReelView {
    pub fn new(reel: &Reel, startup: Option<StartupSummary>, is_liked: bool) -> Self {
        Self {
            reel: ReelResponse::from(reel).with_startup(startup),
            is_liked,
        }
    }
}

impl From<&ReelComment> for CommentResponse {
    fn from(comment: &ReelComment) -> Self {
        Self {
            id: comment.id,
            reel_id: comment.reel_id,
            user_id: comment.user_id,
            content: comment.content.clone(),
            parent_comment_id: comment.parent_comment_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<ReelComment> for CommentResponse {
    fn from(comment: ReelComment) -> Self {
        Self::from(&comment)
    }
}

impl From<&Startup> for StartupResponse {
    fn from(startup: &Startup) -> Self {
        Self {
            id: startup.id,
            founder_id: startup.founder_id,
            name: startup.name.clone(),
            tagline: startup.tagline.clone(),
            description: startup.description.clone(),
            industry: startup.industry.clone(),
            stage: startup.stage.clone(),
            website: startup.website.clone(),
            logo_url: startup.logo_url.clone(),
            follower_count: startup.follower_count,
            created_at: startup.created_at,
        }
    }
}

impl From<&Startup> for StartupSummary {
    fn from(startup: &Startup) -> Self {
        Self {
            id: startup.id,
            name: startup.name.clone(),
            logo_url: startup.logo_url.clone(),
        }
    }
}

impl From<Startup> for StartupResponse {
    fn from(startup: Startup) -> Self {
        Self::from(&startup)
    }
}
