//! # evoa-db
//!
//! Database layer implementing the `evoa-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations; every membership change and its counter
//!   adjustment share one transaction
//!
//! ## Usage
//!
//! ```rust,ignore
//! use evoa_db::{create_pool, run_migrations, DatabaseConfig, PgReelRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let reels = PgReelRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{
    create_pool, create_pool_from_env, run_migrations, run_migrations_from, DatabaseConfig, PgPool,
};
pub use repositories::{
    PgCommentRepository, PgFollowRepository, PgLikeRepository, PgReelRepository,
    PgShareRepository, PgStartupRepository,
};
