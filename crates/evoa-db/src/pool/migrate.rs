//! Schema migrations

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::Path;
use tracing::info;

/// Migrations compiled into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending embedded migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!(count = MIGRATOR.migrations.len(), "Database migrations applied");
    Ok(())
}

/// Apply every pending migration found in `dir` at runtime
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;
    info!(dir = %dir.display(), "Database migrations applied");
    Ok(())
}
