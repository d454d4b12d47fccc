//! Database connection pool management

mod migrate;
mod postgres;

pub use migrate::{run_migrations, run_migrations_from};
pub use postgres::{create_pool, create_pool_from_env, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
