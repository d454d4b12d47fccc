//! PostgreSQL implementation of ReelRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use evoa_core::entities::Reel;
use evoa_core::traits::{FeedQuery, ReelRepository, RepoResult};

use crate::models::ReelModel;

use super::error::map_db_error;

/// Start a `SELECT` over live reels
///
/// Every reel read goes through here so the soft-delete predicate cannot be
/// left out. Callers append further conditions with `AND ...`.
pub(crate) fn live_reels<'a>() -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("SELECT ");
    qb.push(ReelModel::COLUMNS);
    qb.push(" FROM reels r WHERE r.deleted_at IS NULL");
    qb
}

/// PostgreSQL implementation of ReelRepository
#[derive(Clone)]
pub struct PgReelRepository {
    pool: PgPool,
}

impl PgReelRepository {
    /// Create a new PgReelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReelRepository for PgReelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reel>> {
        let mut qb = live_reels();
        qb.push(" AND r.id = ").push_bind(id);

        let result = qb
            .build_query_as::<ReelModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Reel::from))
    }

    #[instrument(skip(self, query), fields(limit = query.limit, cursor = ?query.cursor))]
    async fn find_feed(&self, query: &FeedQuery) -> RepoResult<Vec<Reel>> {
        let mut qb = live_reels();

        if let Some(ids) = &query.startup_ids {
            qb.push(" AND r.startup_id = ANY(").push_bind(ids.clone()).push(")");
        }

        if let Some(cursor) = query.cursor {
            match cursor.id() {
                Some(id) => {
                    qb.push(" AND (r.created_at, r.id) < (")
                        .push_bind(cursor.created_at())
                        .push(", ")
                        .push_bind(id)
                        .push(")");
                }
                None => {
                    qb.push(" AND r.created_at < ").push_bind(cursor.created_at());
                }
            }
        }

        qb.push(" ORDER BY r.created_at DESC, r.id DESC LIMIT ")
            .push_bind(query.limit.max(0));

        let rows = qb
            .build_query_as::<ReelModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reel::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Reel>> {
        let mut qb = live_reels();
        qb.push(" AND r.is_featured ORDER BY r.like_count DESC, r.created_at DESC LIMIT ")
            .push_bind(limit.max(0));

        let rows = qb
            .build_query_as::<ReelModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reel::from).collect())
    }
}
