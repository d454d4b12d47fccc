//! Startup service
//!
//! Startup lookup and the follow directory that drives the Following feed.

use std::collections::HashMap;

use evoa_core::entities::{Follow, Reel};
use evoa_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{MessageResponse, StartupResponse, StartupSummary};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feed::FeedService;

/// Startup service
pub struct StartupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StartupService<'a> {
    /// Create a new StartupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a startup by ID
    #[instrument(skip(self))]
    pub async fn get(&self, startup_id: Uuid) -> ServiceResult<StartupResponse> {
        let startup = self
            .ctx
            .startup_repo()
            .find_by_id(startup_id)
            .await?
            .ok_or(DomainError::StartupNotFound(startup_id))?;

        Ok(StartupResponse::from(startup))
    }

    /// Follow a startup
    #[instrument(skip(self))]
    pub async fn follow(&self, viewer_id: Uuid, startup_id: Uuid) -> ServiceResult<MessageResponse> {
        self.get(startup_id).await?;

        self.ctx
            .follow_repo()
            .create(&Follow::new(viewer_id, startup_id))
            .await?;

        info!(viewer_id = %viewer_id, startup_id = %startup_id, "Startup followed");

        FeedService::new(self.ctx).invalidate_viewer(viewer_id).await;

        Ok(MessageResponse::new("Startup followed successfully"))
    }

    /// Stop following a startup
    #[instrument(skip(self))]
    pub async fn unfollow(&self, viewer_id: Uuid, startup_id: Uuid) -> ServiceResult<MessageResponse> {
        self.ctx.follow_repo().delete(viewer_id, startup_id).await?;

        info!(viewer_id = %viewer_id, startup_id = %startup_id, "Startup unfollowed");

        FeedService::new(self.ctx).invalidate_viewer(viewer_id).await;

        Ok(MessageResponse::new("Startup unfollowed successfully"))
    }

    /// Summaries of the live startups behind `reels`, keyed by startup ID
    pub(crate) async fn summaries_for(
        &self,
        reels: &[Reel],
    ) -> ServiceResult<HashMap<Uuid, StartupSummary>> {
        let mut ids: Vec<Uuid> = reels.iter().map(|r| r.startup_id).collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let startups = self.ctx.startup_repo().find_by_ids(&ids).await?;
        Ok(startups
            .iter()
            .map(|s| (s.id, StartupSummary::from(s)))
            .collect())
    }

    /// Startups the viewer follows, most recent follow first
    #[instrument(skip(self))]
    pub async fn following(&self, viewer_id: Uuid) -> ServiceResult<Vec<StartupResponse>> {
        let startups = self.ctx.follow_repo().find_followed_startups(viewer_id).await?;
        Ok(startups.iter().map(StartupResponse::from).collect())
    }
}
