//! Feed service
//!
//! Assembles For You and Following pages with keyset pagination. Pages are
//! read through the cache and stored for the configured TTL.

use std::collections::HashSet;

use evoa_cache::{feed_page_key, viewer_feed_pattern};
use evoa_core::entities::Reel;
use evoa_core::traits::FeedQuery;
use evoa_core::{FeedCursor, FeedKind};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{FeedPageResponse, ReelView};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::startup::StartupService;

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: u32 = 1;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: u32 = 50;
/// Page size when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one page of the viewer's feed
    #[instrument(skip(self))]
    pub async fn get_feed(
        &self,
        viewer_id: Uuid,
        kind: FeedKind,
        cursor: Option<FeedCursor>,
        limit: u32,
    ) -> ServiceResult<FeedPageResponse> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(ServiceError::validation(format!(
                "limit must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"
            )));
        }

        let key = feed_page_key(kind, viewer_id, cursor.as_ref(), i64::from(limit));
        if let Some(page) = self.ctx.cache().get_json::<FeedPageResponse>(&key).await {
            return Ok(page);
        }

        // One extra row tells us whether another page exists
        let mut query = FeedQuery::new(cursor, i64::from(limit) + 1);

        if kind == FeedKind::Following {
            let startup_ids = self
                .ctx
                .follow_repo()
                .find_followed_startup_ids(viewer_id)
                .await?;

            if startup_ids.is_empty() {
                debug!(viewer_id = %viewer_id, "viewer follows no startups");
                return Ok(FeedPageResponse::empty());
            }
            query = query.from_startups(startup_ids);
        }

        let rows = self.ctx.reel_repo().find_feed(&query).await?;
        let (reels, next_cursor) = split_page(rows, limit as usize);

        let liked = self.liked_among(viewer_id, &reels).await?;
        let startups = StartupService::new(self.ctx).summaries_for(&reels).await?;
        let page = FeedPageResponse {
            reels: reels
                .iter()
                .map(|reel| {
                    ReelView::new(
                        reel,
                        startups.get(&reel.startup_id).cloned(),
                        liked.contains(&reel.id),
                    )
                })
                .collect(),
            has_more: next_cursor.is_some(),
            next_cursor: next_cursor.map(|c| c.encode()),
        };

        self.ctx
            .cache()
            .set_json(&key, &page, Some(self.ctx.feed_cache_ttl()))
            .await;

        Ok(page)
    }

    /// Drop every cached page of both feed kinds for one viewer
    #[instrument(skip(self))]
    pub async fn invalidate_viewer(&self, viewer_id: Uuid) {
        let mut removed = 0;
        for kind in FeedKind::ALL {
            removed += self
                .ctx
                .cache()
                .delete_matching(&viewer_feed_pattern(kind, viewer_id))
                .await;
        }

        info!(viewer_id = %viewer_id, removed, "Feed cache invalidated");
    }

    async fn liked_among(&self, viewer_id: Uuid, reels: &[Reel]) -> ServiceResult<HashSet<Uuid>> {
        if reels.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<Uuid> = reels.iter().map(|r| r.id).collect();
        let liked = self
            .ctx
            .like_repo()
            .find_liked_reel_ids(viewer_id, &ids)
            .await?;

        Ok(liked.into_iter().collect())
    }
}

/// Trim a `limit + 1` window to `limit` rows and derive the next cursor
///
/// The cursor carries the last row's id only when the look-ahead row shares
/// its timestamp, so a run of equal timestamps can straddle the boundary.
fn split_page(mut rows: Vec<Reel>, limit: usize) -> (Vec<Reel>, Option<FeedCursor>) {
    if rows.len() <= limit {
        return (rows, None);
    }

    rows.truncate(limit + 1);
    let lookahead = rows.pop();

    let next = match (rows.last(), lookahead) {
        (Some(last), Some(ahead)) if last.created_at == ahead.created_at => Some(last.tie_cursor()),
        (Some(last), _) => Some(last.cursor()),
        (None, _) => None,
    };

    (rows, next)
}
