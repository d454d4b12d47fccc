//! Engagement service
//!
//! Likes, comments and shares. Each mutation and its reel counter commit
//! together in the repository; likes also drop the acting viewer's cached
//! feed pages so `isLiked` and `likeCount` refresh for them.

use evoa_core::entities::{ReelComment, ReelLike, ReelShare};
use evoa_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CommentResponse, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::feed::FeedService;

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a reel
    #[instrument(skip(self))]
    pub async fn like(&self, reel_id: Uuid, viewer_id: Uuid) -> ServiceResult<MessageResponse> {
        self.require_reel(reel_id).await?;

        self.ctx
            .like_repo()
            .create(&ReelLike::new(reel_id, viewer_id))
            .await?;

        info!(reel_id = %reel_id, viewer_id = %viewer_id, "Reel liked");

        FeedService::new(self.ctx).invalidate_viewer(viewer_id).await;

        Ok(MessageResponse::new("Reel liked successfully"))
    }

    /// Remove the viewer's like from a reel
    #[instrument(skip(self))]
    pub async fn unlike(&self, reel_id: Uuid, viewer_id: Uuid) -> ServiceResult<MessageResponse> {
        self.ctx.like_repo().delete(reel_id, viewer_id).await?;

        info!(reel_id = %reel_id, viewer_id = %viewer_id, "Reel unliked");

        FeedService::new(self.ctx).invalidate_viewer(viewer_id).await;

        Ok(MessageResponse::new("Reel unliked successfully"))
    }

    /// Comment on a reel, or reply to one of its comments
    #[instrument(skip(self, content))]
    pub async fn comment(
        &self,
        reel_id: Uuid,
        viewer_id: Uuid,
        content: String,
        parent_comment_id: Option<Uuid>,
    ) -> ServiceResult<CommentResponse> {
        if content.trim().is_empty() {
            return Err(ServiceError::validation("Comment cannot be empty"));
        }
        if content.chars().count() > ReelComment::MAX_CONTENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: ReelComment::MAX_CONTENT_LENGTH,
            }
            .into());
        }

        self.require_reel(reel_id).await?;

        let comment = match parent_comment_id {
            Some(parent_id) => {
                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .filter(|p| p.can_parent_reply_on(reel_id))
                    .ok_or(DomainError::CommentNotFound(parent_id))?;
                ReelComment::new_reply(reel_id, viewer_id, content, parent.id)
            }
            None => ReelComment::new(reel_id, viewer_id, content),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            reel_id = %reel_id,
            comment_id = %comment.id,
            reply = comment.is_reply(),
            "Comment created"
        );

        Ok(CommentResponse::from(comment))
    }

    /// Top-level comments of a reel, newest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, reel_id: Uuid) -> ServiceResult<Vec<CommentResponse>> {
        self.require_reel(reel_id).await?;

        let comments = self.ctx.comment_repo().find_top_level_by_reel(reel_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Record a share of a reel
    #[instrument(skip(self))]
    pub async fn share(
        &self,
        reel_id: Uuid,
        viewer_id: Uuid,
        platform: Option<String>,
    ) -> ServiceResult<MessageResponse> {
        let platform = platform
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        if platform
            .as_ref()
            .is_some_and(|p| p.chars().count() > ReelShare::MAX_PLATFORM_LENGTH)
        {
            return Err(ServiceError::validation(format!(
                "Platform must be at most {} characters",
                ReelShare::MAX_PLATFORM_LENGTH
            )));
        }

        self.require_reel(reel_id).await?;

        let share = ReelShare::new(reel_id, viewer_id, platform);
        self.ctx.share_repo().create(&share).await?;

        info!(
            reel_id = %reel_id,
            platform = share.platform.as_deref().unwrap_or("unspecified"),
            "Reel shared"
        );

        Ok(MessageResponse::new("Reel shared successfully"))
    }

    async fn require_reel(&self, reel_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .reel_repo()
            .find_by_id(reel_id)
            .await?
            .ok_or(DomainError::ReelNotFound(reel_id))?;
        Ok(())
    }
}
