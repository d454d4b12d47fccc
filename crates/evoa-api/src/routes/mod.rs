//! Route definitions
//!
//! All API routes organized by resource.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{explore, health, reels, startups};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately so they
/// bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(reel_routes())
        .merge(startup_routes())
        .merge(explore_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Feed and engagement routes
fn reel_routes() -> Router<AppState> {
    Router::new()
        .route("/reels", get(reels::get_feed))
        .route(
            "/reels/:reel_id/like",
            post(reels::like_reel).delete(reels::unlike_reel),
        )
        .route("/reels/:reel_id/comment", post(reels::comment_on_reel))
        .route("/reels/:reel_id/comments", get(reels::get_comments))
        .route("/reels/:reel_id/share", post(reels::share_reel))
}

/// Startup and follow routes
fn startup_routes() -> Router<AppState> {
    Router::new()
        .route("/startups/following/me", get(startups::get_following))
        .route("/startups/:startup_id", get(startups::get_startup))
        .route(
            "/startups/:startup_id/follow",
            post(startups::follow_startup).delete(startups::unfollow_startup),
        )
}

/// Shared explore listings
fn explore_routes() -> Router<AppState> {
    Router::new()
        .route("/explore/battleground/live", get(explore::battleground))
        .route("/explore/startups/top", get(explore::top_startups))
        .route("/explore/startups/week", get(explore::startups_of_the_week))
}
