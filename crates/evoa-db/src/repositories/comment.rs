//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use evoa_core::entities::ReelComment;
use evoa_core::error::DomainError;
use evoa_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::counters::{self, Counter};
use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ReelComment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, reel_id, user_id, content, parent_comment_id, created_at, updated_at, deleted_at
            FROM reel_comments
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReelComment::from))
    }

    #[instrument(skip(self))]
    async fn find_top_level_by_reel(&self, reel_id: Uuid) -> RepoResult<Vec<ReelComment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, reel_id, user_id, content, parent_comment_id, created_at, updated_at, deleted_at
            FROM reel_comments
            WHERE reel_id = $1 AND parent_comment_id IS NULL AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(reel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReelComment::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, reel_id = %comment.reel_id))]
    async fn create(&self, comment: &ReelComment) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO reel_comments
                (id, reel_id, user_id, content, parent_comment_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id)
        .bind(comment.reel_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .bind(comment.parent_comment_id)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_fk_violation(e, || match comment.parent_comment_id {
                Some(parent) => DomainError::CommentNotFound(parent),
                None => DomainError::ReelNotFound(comment.reel_id),
            })
        })?;

        counters::increment(&mut tx, Counter::ReelComments, comment.reel_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
