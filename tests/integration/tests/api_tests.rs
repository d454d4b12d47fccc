//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (`DATABASE_URL`)
//! - Optionally a Redis instance (`REDIS_HOST`) to exercise feed caching
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

/// A server, a fresh viewer, and a startup that viewer follows
async fn following_setup() -> (TestServer, String, Uuid) {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();
    let startup = seed_startup(&server.pool).await.unwrap();

    let response = server
        .post_empty_auth(&format!("/startups/{startup}/follow"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    (server, token, startup)
}

async fn following_page(server: &TestServer, token: &str, query: &str) -> FeedPage {
    let response = server
        .get_auth(&format!("/reels?type=following{query}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_feed_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/reels").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let response = server.get_auth("/reels", "garbage").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_following_feed_empty_without_follows() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    let page = following_page(&server, &token, "").await;
    assert!(page.reels.is_empty());
    assert!(page.next_cursor.is_none());
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_feed_pagination() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let ids = seed_reels(&server.pool, startup, 5).await.unwrap();

    let first = following_page(&server, &token, "&limit=2").await;
    assert_eq!(first.ids(), ids[..2]);
    assert!(first.has_more);
    assert!(first
        .reels
        .iter()
        .all(|r| r.startup.as_ref().map(|s| s.id) == Some(startup)));
    let cursor = first.next_cursor.clone().expect("cursor on a full page");

    let second = following_page(&server, &token, &format!("&limit=2&cursor={cursor}")).await;
    assert_eq!(second.ids(), ids[2..4]);
    assert!(second.has_more);
    let cursor = second.next_cursor.clone().expect("cursor on a full page");

    let last = following_page(&server, &token, &format!("&limit=2&cursor={cursor}")).await;
    assert_eq!(last.ids(), ids[4..]);
    assert!(!last.has_more);
    assert!(last.next_cursor.is_none());
}

#[tokio::test]
async fn test_feed_exact_page_has_no_more() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let ids = seed_reels(&server.pool, startup, 3).await.unwrap();

    let page = following_page(&server, &token, "&limit=3").await;
    assert_eq!(page.ids(), ids);
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
}

#[tokio::test]
async fn test_feed_hides_deleted_reels() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let ids = seed_reels(&server.pool, startup, 3).await.unwrap();
    soft_delete_reel(&server.pool, ids[1]).await.unwrap();

    let page = following_page(&server, &token, "").await;
    assert_eq!(page.ids(), vec![ids[0], ids[2]]);
}

#[tokio::test]
async fn test_feed_rejects_bad_parameters() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    for query in ["limit=0", "limit=51", "limit=x", "type=popular"] {
        let response = server.get_auth(&format!("/reels?{query}"), &token).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }

    let response = server.get_auth("/reels?cursor=soon", &token).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_CURSOR");
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_and_unlike() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let ids = seed_reels(&server.pool, startup, 1).await.unwrap();
    let reel = ids[0];

    let response = server
        .post_empty_auth(&format!("/reels/{reel}/like"), &token)
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Reel liked successfully");

    let page = following_page(&server, &token, "").await;
    assert_eq!(page.reels[0].like_count, 1);
    assert!(page.reels[0].is_liked);

    let response = server
        .post_empty_auth(&format!("/reels/{reel}/like"), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ALREADY_LIKED");

    let response = server
        .delete_auth(&format!("/reels/{reel}/like"), &token)
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Reel unliked successfully");

    let page = following_page(&server, &token, "").await;
    assert_eq!(page.reels[0].like_count, 0);
    assert!(!page.reels[0].is_liked);

    let response = server
        .delete_auth(&format!("/reels/{reel}/like"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_like_unknown_reel() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    let response = server
        .post_empty_auth(&format!("/reels/{}/like", Uuid::new_v4()), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_empty_auth("/reels/12/like", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_and_reply() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let reel = seed_reels(&server.pool, startup, 1).await.unwrap()[0];

    let response = server
        .post_auth(&format!("/reels/{reel}/comment"), &token, &NewComment::text("Great pitch"))
        .await
        .unwrap();
    let parent: Comment = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(parent.reel_id, reel);
    assert_eq!(parent.content, "Great pitch");
    assert!(parent.parent_comment_id.is_none());

    let response = server
        .post_auth(
            &format!("/reels/{reel}/comment"),
            &token,
            &NewComment::reply("What is the burn rate?", parent.id),
        )
        .await
        .unwrap();
    let reply: Comment = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_comment_id, Some(parent.id));
    assert_eq!(reply.user_id, parent.user_id);

    let response = server
        .get_auth(&format!("/reels/{reel}/comments"), &token)
        .await
        .unwrap();
    let comments: Vec<Comment> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, parent.id);

    let count: i32 = sqlx::query_scalar("SELECT comment_count FROM reels WHERE id = $1")
        .bind(reel)
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_comment_validation() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let reel = seed_reels(&server.pool, startup, 1).await.unwrap()[0];
    let path = format!("/reels/{reel}/comment");

    let response = server.post_auth(&path, &token, &NewComment::text("")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let long = "x".repeat(2001);
    let response = server.post_auth(&path, &token, &NewComment::text(&long)).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(&path, &token, &NewComment::reply("orphan", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Share Tests
// ============================================================================

#[tokio::test]
async fn test_share_with_and_without_body() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    let reel = seed_reels(&server.pool, startup, 1).await.unwrap()[0];
    let path = format!("/reels/{reel}/share");

    let response = server
        .post_auth(&path, &token, &NewShare { platform: Some("linkedin".to_string()) })
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body.message, "Reel shared successfully");

    let response = server.post_empty_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let count: i32 = sqlx::query_scalar("SELECT share_count FROM reels WHERE id = $1")
        .bind(reel)
        .fetch_one(&server.pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

// ============================================================================
// Startup Tests
// ============================================================================

#[tokio::test]
async fn test_follow_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;

    let response = server
        .post_empty_auth(&format!("/startups/{startup}/follow"), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ALREADY_FOLLOWING");

    let response = server.get_auth(&format!("/startups/{startup}"), &token).await.unwrap();
    let profile: Startup = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.follower_count, 1);

    let response = server.get_auth("/startups/following/me", &token).await.unwrap();
    let following: Vec<Startup> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(following.iter().map(|s| s.id).collect::<Vec<_>>(), vec![startup]);

    let response = server
        .delete_auth(&format!("/startups/{startup}/follow"), &token)
        .await
        .unwrap();
    let body: Message = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Startup unfollowed successfully");

    let response = server
        .delete_auth(&format!("/startups/{startup}/follow"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unfollow_empties_following_feed() {
    if !check_test_env().await {
        return;
    }

    let (server, token, startup) = following_setup().await;
    seed_reels(&server.pool, startup, 2).await.unwrap();

    assert_eq!(following_page(&server, &token, "").await.reels.len(), 2);

    let response = server
        .delete_auth(&format!("/startups/{startup}/follow"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert!(following_page(&server, &token, "").await.reels.is_empty());
}

#[tokio::test]
async fn test_unknown_startup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    let response = server
        .get_auth(&format!("/startups/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_empty_auth(&format!("/startups/{}/follow", Uuid::new_v4()), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Explore Tests
// ============================================================================

#[tokio::test]
async fn test_battleground_lists_featured() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    let response = server
        .get_auth("/explore/battleground/live", &token)
        .await
        .unwrap();
    let reels: Vec<ReelItem> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(reels.len() <= 10);
    assert!(reels.iter().all(|r| r.is_featured));
    assert!(reels.windows(2).all(|w| w[0].like_count >= w[1].like_count));
    assert!(reels
        .iter()
        .all(|r| r.startup.as_ref().map_or(true, |s| s.id == r.startup_id)));
}

#[tokio::test]
async fn test_top_startups_ranked_by_followers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();

    let response = server.get_auth("/explore/startups/top", &token).await.unwrap();
    let startups: Vec<Startup> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(startups.len() <= 20);
    assert!(startups
        .windows(2)
        .all(|w| w[0].follower_count >= w[1].follower_count));
}

#[tokio::test]
async fn test_startups_of_the_week_skip_older_startups() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.new_viewer().unwrap();
    let veteran = seed_startup(&server.pool).await.unwrap();
    set_startup_ranking(
        &server.pool,
        veteran,
        i32::MAX,
        chrono::Utc::now() - chrono::Duration::days(30),
    )
    .await
    .unwrap();

    let response = server.get_auth("/explore/startups/week", &token).await.unwrap();
    let startups: Vec<Startup> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(startups.len() <= 10);
    assert!(startups.iter().all(|s| s.id != veteran));
    assert!(startups
        .windows(2)
        .all(|w| w[0].follower_count >= w[1].follower_count));
}
