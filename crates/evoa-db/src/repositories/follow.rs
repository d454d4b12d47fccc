//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use evoa_core::entities::{Follow, Startup};
use evoa_core::error::DomainError;
use evoa_core::traits::{FollowRepository, RepoResult};

use crate::models::StartupModel;

use super::counters::{self, Counter};
use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND startup_id = $2)
            "#,
        )
        .bind(follower_id)
        .bind(startup_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_followed_startup_ids(&self, follower_id: Uuid) -> RepoResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT startup_id FROM follows WHERE follower_id = $1
            "#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_followed_startups(&self, follower_id: Uuid) -> RepoResult<Vec<Startup>> {
        let results = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT s.id, s.founder_id, s.name, s.tagline, s.description, s.industry, s.stage,
                   s.website, s.logo_url, s.follower_count, s.created_at, s.updated_at, s.deleted_at
            FROM follows f
            INNER JOIN startups s ON s.id = f.startup_id
            WHERE f.follower_id = $1 AND s.deleted_at IS NULL
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Startup::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO follows (id, follower_id, startup_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (follower_id, startup_id) DO NOTHING
            "#,
        )
        .bind(follow.id)
        .bind(follow.follower_id)
        .bind(follow.startup_id)
        .bind(follow.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::StartupNotFound(follow.startup_id)))?
        .rows_affected();

        if inserted == 0 {
            return Err(DomainError::AlreadyFollowing);
        }

        counters::increment(&mut tx, Counter::StartupFollowers, follow.startup_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM follows WHERE follower_id = $1 AND startup_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(startup_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        if deleted == 0 {
            return Err(DomainError::FollowNotFound);
        }

        counters::decrement(&mut tx, Counter::StartupFollowers, startup_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
