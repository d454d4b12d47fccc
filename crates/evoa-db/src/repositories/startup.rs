//! PostgreSQL implementation of StartupRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use evoa_core::entities::Startup;
use evoa_core::traits::{RepoResult, StartupRepository};

use crate::models::StartupModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StartupRepository
#[derive(Clone)]
pub struct PgStartupRepository {
    pool: PgPool,
}

impl PgStartupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StartupRepository for PgStartupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>> {
        let result = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT id, founder_id, name, tagline, description, industry, stage, website,
                   logo_url, follower_count, created_at, updated_at, deleted_at
            FROM startups
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Startup::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Startup>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT id, founder_id, name, tagline, description, industry, stage, website,
                   logo_url, follower_count, created_at, updated_at, deleted_at
            FROM startups
            WHERE id = ANY($1) AND deleted_at IS NULL
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Startup::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_top_by_followers(&self, limit: i64) -> RepoResult<Vec<Startup>> {
        let rows = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT id, founder_id, name, tagline, description, industry, stage, website,
                   logo_url, follower_count, created_at, updated_at, deleted_at
            FROM startups
            WHERE deleted_at IS NULL
            ORDER BY follower_count DESC, created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Startup::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_recent_by_followers(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Startup>> {
        let rows = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT id, founder_id, name, tagline, description, industry, stage, website,
                   logo_url, follower_count, created_at, updated_at, deleted_at
            FROM startups
            WHERE created_at >= $1 AND deleted_at IS NULL
            ORDER BY follower_count DESC, created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Startup::from).collect())
    }
}
