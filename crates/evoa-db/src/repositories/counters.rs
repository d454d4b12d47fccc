//! Denormalized counter adjustments
//!
//! Always called on the transaction that carries the matching membership
//! change, so the row and its counter commit or roll back together.

use sqlx::PgConnection;
use uuid::Uuid;

use evoa_core::traits::RepoResult;

use super::error::map_db_error;

/// Counter column on `reels` or `startups`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    ReelLikes,
    ReelComments,
    ReelShares,
    StartupFollowers,
}

impl Counter {
    fn table(self) -> &'static str {
        match self {
            Self::ReelLikes | Self::ReelComments | Self::ReelShares => "reels",
            Self::StartupFollowers => "startups",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::ReelLikes => "like_count",
            Self::ReelComments => "comment_count",
            Self::ReelShares => "share_count",
            Self::StartupFollowers => "follower_count",
        }
    }

    fn increment_sql(self) -> String {
        format!(
            "UPDATE {table} SET {col} = {col} + 1, updated_at = NOW() WHERE id = $1",
            table = self.table(),
            col = self.column()
        )
    }

    fn decrement_sql(self) -> String {
        format!(
            "UPDATE {table} SET {col} = GREATEST({col} - 1, 0), updated_at = NOW() WHERE id = $1",
            table = self.table(),
            col = self.column()
        )
    }
}

/// `counter += 1` on the row `id`
pub async fn increment(conn: &mut PgConnection, counter: Counter, id: Uuid) -> RepoResult<()> {
    sqlx::query(&counter.increment_sql())
        .bind(id)
        .execute(conn)
        .await
        .map_err(map_db_error)?;
    Ok(())
}

/// `counter -= 1` on the row `id`, floored at zero
pub async fn decrement(conn: &mut PgConnection, counter: Counter, id: Uuid) -> RepoResult<()> {
    sqlx::query(&counter.decrement_sql())
        .bind(id)
        .execute(conn)
        .await
        .map_err(map_db_error)?;
    Ok(())
}
