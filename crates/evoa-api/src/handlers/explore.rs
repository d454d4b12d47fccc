//! Explore handlers

use axum::{extract::State, Json};
use evoa_service::{ExploreService, ReelResponse, StartupResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Featured reels ranked by likes
///
/// GET /explore/battleground/live
pub async fn battleground(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ReelResponse>>> {
    let service = ExploreService::new(state.service_context());
    let reels = service.battleground().await?;
    Ok(Json(reels))
}

/// Startups with the most followers
///
/// GET /explore/startups/top
pub async fn top_startups(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let service = ExploreService::new(state.service_context());
    Ok(Json(service.top_startups().await?))
}

/// Startups created in the last week, most followers first
///
/// GET /explore/startups/week
pub async fn startups_of_the_week(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let service = ExploreService::new(state.service_context());
    Ok(Json(service.startups_of_the_week().await?))
}
