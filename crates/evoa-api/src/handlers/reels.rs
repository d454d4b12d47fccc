//! Reel handlers
//!
//! Feed, like, comment and share endpoints.

use axum::{extract::State, Json};
use evoa_service::{
    CommentResponse, CreateCommentRequest, EngagementService, FeedPageResponse, FeedService,
    MessageResponse, ShareReelRequest,
};

use crate::extractors::{AuthUser, FeedParams, OptionalValidatedJson, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get a page of the viewer's feed
///
/// GET /reels?type=for_you|following&cursor=...&limit=...
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
    params: FeedParams,
) -> ApiResult<Json<FeedPageResponse>> {
    let service = FeedService::new(state.service_context());
    let page = service
        .get_feed(auth.viewer_id, params.kind, params.cursor, params.limit)
        .await?;
    Ok(Json(page))
}

/// Like a reel
///
/// POST /reels/{reel_id}/like
pub async fn like_reel(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(reel_id): UuidPath,
) -> ApiResult<Created<MessageResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.like(reel_id, auth.viewer_id).await?;
    Ok(Created(response))
}

/// Remove a like
///
/// DELETE /reels/{reel_id}/like
pub async fn unlike_reel(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(reel_id): UuidPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.unlike(reel_id, auth.viewer_id).await?;
    Ok(Json(response))
}

/// Comment on a reel
///
/// POST /reels/{reel_id}/comment
pub async fn comment_on_reel(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(reel_id): UuidPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let service = EngagementService::new(state.service_context());
    let comment = service
        .comment(reel_id, auth.viewer_id, request.content, request.parent_comment_id)
        .await?;
    Ok(Created(comment))
}

/// List top-level comments
///
/// GET /reels/{reel_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    UuidPath(reel_id): UuidPath,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = EngagementService::new(state.service_context());
    let comments = service.list_comments(reel_id).await?;
    Ok(Json(comments))
}

/// Record a share
///
/// POST /reels/{reel_id}/share
pub async fn share_reel(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(reel_id): UuidPath,
    OptionalValidatedJson(request): OptionalValidatedJson<ShareReelRequest>,
) -> ApiResult<Created<MessageResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service
        .share(reel_id, auth.viewer_id, request.platform)
        .await?;
    Ok(Created(response))
}
