//! Explore service
//!
//! Shared listings for the explore surface: the featured "battleground" and
//! two startup rankings. Each listing is the same for every viewer and is
//! cached as a whole.

use chrono::Duration;
use evoa_cache::{BATTLEGROUND_KEY, TOP_STARTUPS_KEY, WEEKLY_STARTUPS_KEY};
use evoa_core::now_micros;
use tracing::{debug, instrument};

use crate::dto::{ReelResponse, StartupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::startup::StartupService;

/// Number of reels in the battleground listing
pub const BATTLEGROUND_SIZE: i64 = 10;

/// Number of startups in the top ranking
pub const TOP_STARTUPS_SIZE: i64 = 20;
/// Seconds the top ranking stays cached
pub const TOP_STARTUPS_TTL: u64 = 1800;

/// Number of startups in the weekly ranking
pub const WEEKLY_STARTUPS_SIZE: i64 = 10;
/// Seconds the weekly ranking stays cached
pub const WEEKLY_STARTUPS_TTL: u64 = 3600;
/// How far back the weekly ranking looks
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Explore service
pub struct ExploreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExploreService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Live featured reels, most liked first
    #[instrument(skip(self))]
    pub async fn battleground(&self) -> ServiceResult<Vec<ReelResponse>> {
        if let Some(reels) = self.ctx.cache().get_json(BATTLEGROUND_KEY).await {
            return Ok(reels);
        }

        let featured = self.ctx.reel_repo().find_featured(BATTLEGROUND_SIZE).await?;
        let startups = StartupService::new(self.ctx).summaries_for(&featured).await?;

        let reels: Vec<ReelResponse> = featured
            .iter()
            .map(|reel| {
                ReelResponse::from(reel).with_startup(startups.get(&reel.startup_id).cloned())
            })
            .collect();

        debug!(count = reels.len(), "Battleground loaded");

        self.ctx
            .cache()
            .set_json(BATTLEGROUND_KEY, &reels, Some(self.ctx.feed_cache_ttl()))
            .await;

        Ok(reels)
    }

    /// Live startups with the most followers
    #[instrument(skip(self))]
    pub async fn top_startups(&self) -> ServiceResult<Vec<StartupResponse>> {
        if let Some(startups) = self.ctx.cache().get_json(TOP_STARTUPS_KEY).await {
            return Ok(startups);
        }

        let startups: Vec<StartupResponse> = self
            .ctx
            .startup_repo()
            .find_top_by_followers(TOP_STARTUPS_SIZE)
            .await?
            .iter()
            .map(StartupResponse::from)
            .collect();

        debug!(count = startups.len(), "Top startups loaded");

        self.ctx
            .cache()
            .set_json(TOP_STARTUPS_KEY, &startups, Some(TOP_STARTUPS_TTL))
            .await;

        Ok(startups)
    }

    /// Startups created in the last week, most followers first
    #[instrument(skip(self))]
    pub async fn startups_of_the_week(&self) -> ServiceResult<Vec<StartupResponse>> {
        if let Some(startups) = self.ctx.cache().get_json(WEEKLY_STARTUPS_KEY).await {
            return Ok(startups);
        }

        let since = now_micros() - Duration::days(WEEKLY_WINDOW_DAYS);
        let startups: Vec<StartupResponse> = self
            .ctx
            .startup_repo()
            .find_recent_by_followers(since, WEEKLY_STARTUPS_SIZE)
            .await?
            .iter()
            .map(StartupResponse::from)
            .collect();

        debug!(count = startups.len(), "Startups of the week loaded");

        self.ctx
            .cache()
            .set_json(WEEKLY_STARTUPS_KEY, &startups, Some(WEEKLY_STARTUPS_TTL))
            .await;

        Ok(startups)
    }
}
