//! PostgreSQL implementation of ShareRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use evoa_core::entities::ReelShare;
use evoa_core::error::DomainError;
use evoa_core::traits::{RepoResult, ShareRepository};

use super::counters::{self, Counter};
use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of ShareRepository
#[derive(Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    /// Create a new PgShareRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShareRepository for PgShareRepository {
    #[instrument(skip(self))]
    async fn create(&self, share: &ReelShare) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO reel_shares (id, reel_id, user_id, platform, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(share.id)
        .bind(share.reel_id)
        .bind(share.user_id)
        .bind(share.platform.as_deref())
        .bind(share.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::ReelNotFound(share.reel_id)))?;

        counters::increment(&mut tx, Counter::ReelShares, share.reel_id).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
