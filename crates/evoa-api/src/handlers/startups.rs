//! Startup handlers
//!
//! Profile lookup and follow relationships.

use axum::{extract::State, Json};
use evoa_service::{MessageResponse, StartupResponse, StartupService};

use crate::extractors::{AuthUser, UuidPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get a startup profile
///
/// GET /startups/{startup_id}
pub async fn get_startup(
    State(state): State<AppState>,
    _auth: AuthUser,
    UuidPath(startup_id): UuidPath,
) -> ApiResult<Json<StartupResponse>> {
    let service = StartupService::new(state.service_context());
    let startup = service.get(startup_id).await?;
    Ok(Json(startup))
}

/// Follow a startup
///
/// POST /startups/{startup_id}/follow
pub async fn follow_startup(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(startup_id): UuidPath,
) -> ApiResult<Created<MessageResponse>> {
    let service = StartupService::new(state.service_context());
    let response = service.follow(auth.viewer_id, startup_id).await?;
    Ok(Created(response))
}

/// Unfollow a startup
///
/// DELETE /startups/{startup_id}/follow
pub async fn unfollow_startup(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(startup_id): UuidPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = StartupService::new(state.service_context());
    let response = service.unfollow(auth.viewer_id, startup_id).await?;
    Ok(Json(response))
}

/// Startups the viewer follows, most recently followed first
///
/// GET /startups/following/me
pub async fn get_following(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<StartupResponse>>> {
    let service = StartupService::new(state.service_context());
    let startups = service.following(auth.viewer_id).await?;
    Ok(Json(startups))
}
