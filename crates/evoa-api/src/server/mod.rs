//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use evoa_cache::{Cache, CacheStatus, RedisCache, RedisPool};
use evoa_common::{AppConfig, AppError, JwtService};
use evoa_db::{
    create_pool, run_migrations, run_migrations_from, DatabaseConfig, PgCommentRepository,
    PgFollowRepository, PgLikeRepository, PgReelRepository, PgShareRepository,
    PgStartupRepository,
};
use evoa_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limiter cannot be configured
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );
    Ok(router.with_state(state))
}

/// Select the cache backend; no configured endpoint disables caching
async fn create_cache(config: &AppConfig) -> Result<Cache, AppError> {
    let Some(redis_config) = &config.redis else {
        info!("REDIS_HOST not set, feed caching disabled");
        return Ok(Cache::disabled());
    };

    info!(host = %redis_config.host, port = redis_config.port, "Connecting to Redis...");
    let pool = RedisPool::from_config(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let cache = Cache::new(RedisCache::new(pool));

    // An unreachable cache only costs hit rate
    match cache.status().await {
        CacheStatus::Healthy => info!("Redis connection established"),
        status => warn!(status = status.as_str(), "Redis unreachable, serving from the database"),
    }

    Ok(cache)
}

/// Initialize all dependencies and create AppState
///
/// # Errors
/// Returns an error if the database is unreachable, migrations fail, or the
/// service context is incomplete
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::with_url(config.database.url.clone())
        .sized(config.database.min_connections, config.database.max_connections);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    match config.database.migrations_dir.as_deref() {
        Some(dir) => run_migrations_from(&pool, Path::new(dir)).await,
        None => run_migrations(&pool).await,
    }
    .map_err(|e| AppError::Database(e.to_string()))?;

    let cache = create_cache(&config).await?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContext::builder()
        .reel_repo(Arc::new(PgReelRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .share_repo(Arc::new(PgShareRepository::new(pool.clone())))
        .startup_repo(Arc::new(PgStartupRepository::new(pool.clone())))
        .follow_repo(Arc::new(PgFollowRepository::new(pool.clone())))
        .cache(cache)
        .feed_cache_ttl(config.feed.cache_ttl_seconds)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}

/// Run the HTTP server until a shutdown signal arrives
///
/// # Errors
/// Returns `AppError::Config` if the address cannot be bound or the server fails
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
///
/// # Errors
/// Returns the first startup or serving error
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;
    run_server(app, &addr).await
}
