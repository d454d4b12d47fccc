//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use evoa_core::entities::ReelLike;
use evoa_core::error::DomainError;
use evoa_core::traits::{LikeRepository, RepoResult};

use super::counters::{self, Counter};
use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM reel_likes WHERE reel_id = $1 AND user_id = $2)
            "#,
        )
        .bind(reel_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, reel_ids), fields(count = reel_ids.len()))]
    async fn find_liked_reel_ids(&self, user_id: Uuid, reel_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        if reel_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT reel_id
            FROM reel_likes
            WHERE user_id = $1 AND reel_id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(reel_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &ReelLike) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO reel_likes (id, reel_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (reel_id, user_id) DO NOTHING
            "#,
        )
        .bind(like.id)
        .bind(like.reel_id)
        .bind(like.user_id)
        .bind(like.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::ReelNotFound(like.reel_id)))?
        .rows_affected();

        if inserted == 0 {
            // Dropping `tx` rolls back
            return Err(DomainError::ReelAlreadyLiked);
        }

        counters::increment(&mut tx, Counter::ReelLikes, like.reel_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM reel_likes WHERE reel_id = $1 AND user_id = $2
            "#,
        )
        .bind(reel_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        if deleted == 0 {
            return Err(DomainError::LikeNotFound);
        }

        counters::decrement(&mut tx, Counter::ReelLikes, reel_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
