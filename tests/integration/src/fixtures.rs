//! Test fixtures and data generators
//!
//! Seeds startups and reels directly in PostgreSQL; the API has no
//! endpoints for creating them.

use anyhow::Result;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Insert a startup and return its ID
pub async fn seed_startup(pool: &PgPool) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO startups (id, founder_id, name, tagline) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(Uuid::new_v4())
    .bind(format!("Startup {}", unique_suffix()))
    .bind("Pitching in sixty seconds")
    .execute(pool)
    .await?;
    Ok(id)
}

/// Insert a reel with the given creation time and return its ID
pub async fn seed_reel(pool: &PgPool, startup_id: Uuid, created_at: DateTime<Utc>) -> Result<Uuid> {
    seed_reel_with(pool, startup_id, created_at, false).await
}

pub async fn seed_reel_with(
    pool: &PgPool,
    startup_id: Uuid,
    created_at: DateTime<Utc>,
    featured: bool,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO reels (id, startup_id, title, video_url, hashtags, is_featured, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        "#,
    )
    .bind(id)
    .bind(startup_id)
    .bind(format!("Pitch {}", unique_suffix()))
    .bind("https://cdn.example.com/pitch.mp4")
    .bind(vec!["fintech".to_string()])
    .bind(featured)
    .bind(created_at)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Insert `count` reels one second apart, newest first in the returned list
pub async fn seed_reels(pool: &PgPool, startup_id: Uuid, count: i64) -> Result<Vec<Uuid>> {
    let base = Utc::now().trunc_subsecs(6);
    let mut ids = Vec::new();
    for i in 0..count {
        ids.push(seed_reel(pool, startup_id, base - Duration::seconds(i)).await?);
    }
    Ok(ids)
}

/// Overwrite a startup's follower count and creation time
pub async fn set_startup_ranking(
    pool: &PgPool,
    startup_id: Uuid,
    followers: i32,
    created_at: DateTime<Utc>,
) -> Result<()> {
    sqlx::query("UPDATE startups SET follower_count = $2, created_at = $3 WHERE id = $1")
        .bind(startup_id)
        .bind(followers)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Soft-delete a reel
pub async fn soft_delete_reel(pool: &PgPool, reel_id: Uuid) -> Result<()> {
    sqlx::query("UPDATE reels SET deleted_at = NOW() WHERE id = $1")
        .bind(reel_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Reel as returned inside a feed page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedReel {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub like_count: i32,
    pub comment_count: i32,
    pub share_count: i32,
    pub is_featured: bool,
    pub is_liked: bool,
    pub startup: Option<StartupRef>,
    pub created_at: String,
}

/// Startup summary embedded in a reel
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupRef {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Feed page response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub reels: Vec<FeedReel>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl FeedPage {
    pub fn ids(&self) -> Vec<Uuid> {
        self.reels.iter().map(|r| r.id).collect()
    }
}

/// Reel without viewer state, as listed by explore
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelItem {
    pub id: Uuid,
    pub startup_id: Uuid,
    pub like_count: i32,
    pub is_featured: bool,
    pub startup: Option<StartupRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub reel_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    pub id: Uuid,
    pub name: String,
    pub follower_count: i32,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Comment request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<Uuid>,
}

impl NewComment {
    pub fn text(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_comment_id: None,
        }
    }

    pub fn reply(content: &str, parent: Uuid) -> Self {
        Self {
            content: content.to_string(),
            parent_comment_id: Some(parent),
        }
    }
}

/// Share request body
#[derive(Debug, Serialize)]
pub struct NewShare {
    pub platform: Option<String>,
}
