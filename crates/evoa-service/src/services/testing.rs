//! In-memory repository fakes for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use evoa_cache::{Cache, CacheError, CacheResult, CacheStore};
use evoa_common::JwtService;
use evoa_core::entities::{Follow, Reel, ReelComment, ReelLike, ReelShare, Startup};
use evoa_core::traits::{
    CommentRepository, FeedQuery, FollowRepository, LikeRepository, ReelRepository, RepoResult,
    ShareRepository, StartupRepository,
};
use evoa_core::DomainError;
use uuid::Uuid;

use super::context::ServiceContext;

#[derive(Debug, Default)]
pub(crate) struct State {
    pub reels: Vec<Reel>,
    pub likes: Vec<ReelLike>,
    pub comments: Vec<ReelComment>,
    pub shares: Vec<ReelShare>,
    pub startups: Vec<Startup>,
    pub follows: Vec<Follow>,
}

impl State {
    fn live_reel_mut(&mut self, id: Uuid) -> RepoResult<&mut Reel> {
        self.reels
            .iter_mut()
            .find(|r| r.id == id && r.is_live())
            .ok_or(DomainError::ReelNotFound(id))
    }
}

/// One store implementing every repository trait over shared state
#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    state: Mutex<State>,
}

impl FakeStore {
    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn add_startup(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.state()
            .startups
            .push(Startup::new(id, Uuid::new_v4(), format!("Startup {id}")));
        id
    }

    pub fn update_startup(&self, id: Uuid, f: impl FnOnce(&mut Startup)) {
        let mut state = self.state();
        let startup = state.startups.iter_mut().find(|s| s.id == id).unwrap();
        f(startup);
    }

    pub fn add_reel(&self, startup_id: Uuid, created_at: DateTime<Utc>) -> Uuid {
        self.add_reel_with_id(Uuid::new_v4(), startup_id, created_at)
    }

    pub fn add_reel_with_id(&self, id: Uuid, startup_id: Uuid, created_at: DateTime<Utc>) -> Uuid {
        let mut reel = Reel::new(
            id,
            startup_id,
            "Pitch".to_string(),
            "https://cdn.example.com/pitch.mp4".to_string(),
        );
        reel.created_at = created_at;
        reel.updated_at = created_at;
        self.state().reels.push(reel);
        id
    }

    pub fn reel(&self, id: Uuid) -> Reel {
        self.state()
            .reels
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .unwrap()
    }

    pub fn update_reel(&self, id: Uuid, f: impl FnOnce(&mut Reel)) {
        let mut state = self.state();
        let reel = state.reels.iter_mut().find(|r| r.id == id).unwrap();
        f(reel);
    }
}

#[async_trait]
impl ReelRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reel>> {
        Ok(self
            .state()
            .reels
            .iter()
            .find(|r| r.id == id && r.is_live())
            .cloned())
    }

    async fn find_feed(&self, query: &FeedQuery) -> RepoResult<Vec<Reel>> {
        let mut reels: Vec<Reel> = self
            .state()
            .reels
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        reels.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        reels.truncate(usize::try_from(query.limit).unwrap());
        Ok(reels)
    }

    async fn find_featured(&self, limit: i64) -> RepoResult<Vec<Reel>> {
        let mut reels: Vec<Reel> = self
            .state()
            .reels
            .iter()
            .filter(|r| r.is_live() && r.is_featured)
            .cloned()
            .collect();
        reels.sort_by(|a, b| b.like_count.cmp(&a.like_count));
        reels.truncate(usize::try_from(limit).unwrap());
        Ok(reels)
    }
}

#[async_trait]
impl LikeRepository for FakeStore {
    async fn exists(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .state()
            .likes
            .iter()
            .any(|l| l.reel_id == reel_id && l.user_id == user_id))
    }

    async fn find_liked_reel_ids(&self, user_id: Uuid, reel_ids: &[Uuid]) -> RepoResult<Vec<Uuid>> {
        Ok(self
            .state()
            .likes
            .iter()
            .filter(|l| l.user_id == user_id && reel_ids.contains(&l.reel_id))
            .map(|l| l.reel_id)
            .collect())
    }

    async fn create(&self, like: &ReelLike) -> RepoResult<()> {
        let mut state = self.state();
        if state
            .likes
            .iter()
            .any(|l| l.reel_id == like.reel_id && l.user_id == like.user_id)
        {
            return Err(DomainError::ReelAlreadyLiked);
        }
        state.live_reel_mut(like.reel_id)?.like_count += 1;
        state.likes.push(like.clone());
        Ok(())
    }

    async fn delete(&self, reel_id: Uuid, user_id: Uuid) -> RepoResult<()> {
        let mut state = self.state();
        let index = state
            .likes
            .iter()
            .position(|l| l.reel_id == reel_id && l.user_id == user_id)
            .ok_or(DomainError::LikeNotFound)?;
        state.likes.remove(index);
        if let Some(reel) = state.reels.iter_mut().find(|r| r.id == reel_id) {
            reel.like_count = (reel.like_count - 1).max(0);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ReelComment>> {
        Ok(self
            .state()
            .comments
            .iter()
            .find(|c| c.id == id && !c.is_deleted())
            .cloned())
    }

    async fn find_top_level_by_reel(&self, reel_id: Uuid) -> RepoResult<Vec<ReelComment>> {
        let mut comments: Vec<ReelComment> = self
            .state()
            .comments
            .iter()
            .filter(|c| c.reel_id == reel_id && !c.is_reply() && !c.is_deleted())
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn create(&self, comment: &ReelComment) -> RepoResult<()> {
        let mut state = self.state();
        state.live_reel_mut(comment.reel_id)?.comment_count += 1;
        state.comments.push(comment.clone());
        Ok(())
    }
}

#[async_trait]
impl ShareRepository for FakeStore {
    async fn create(&self, share: &ReelShare) -> RepoResult<()> {
        let mut state = self.state();
        state.live_reel_mut(share.reel_id)?.share_count += 1;
        state.shares.push(share.clone());
        Ok(())
    }
}

#[async_trait]
impl StartupRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>> {
        Ok(self
            .state()
            .startups
            .iter()
            .find(|s| s.id == id && !s.is_deleted())
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<Startup>> {
        Ok(self
            .state()
            .startups
            .iter()
            .filter(|s| ids.contains(&s.id) && !s.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_top_by_followers(&self, limit: i64) -> RepoResult<Vec<Startup>> {
        Ok(ranked(self.state().startups.iter().filter(|s| !s.is_deleted()), limit))
    }

    async fn find_recent_by_followers(
        &self,
        since: DateTime<Utc>,
        limit: i64,
    ) -> RepoResult<Vec<Startup>> {
        Ok(ranked(
            self.state()
                .startups
                .iter()
                .filter(|s| !s.is_deleted() && s.created_at >= since),
            limit,
        ))
    }
}

fn ranked<'a>(startups: impl Iterator<Item = &'a Startup>, limit: i64) -> Vec<Startup> {
    let mut startups: Vec<Startup> = startups.cloned().collect();
    startups.sort_by(|a, b| {
        (b.follower_count, b.created_at, b.id).cmp(&(a.follower_count, a.created_at, a.id))
    });
    startups.truncate(usize::try_from(limit).unwrap());
    startups
}

#[async_trait]
impl FollowRepository for FakeStore {
    async fn exists(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<bool> {
        Ok(self
            .state()
            .follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.startup_id == startup_id))
    }

    async fn find_followed_startup_ids(&self, follower_id: Uuid) -> RepoResult<Vec<Uuid>> {
        Ok(self
            .state()
            .follows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .map(|f| f.startup_id)
            .collect())
    }

    async fn find_followed_startups(&self, follower_id: Uuid) -> RepoResult<Vec<Startup>> {
        let state = self.state();
        let mut follows: Vec<&Follow> = state
            .follows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .collect();
        follows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(follows
            .into_iter()
            .filter_map(|f| state.startups.iter().find(|s| s.id == f.startup_id).cloned())
            .collect())
    }

    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        let mut state = self.state();
        if state
            .follows
            .iter()
            .any(|f| f.follower_id == follow.follower_id && f.startup_id == follow.startup_id)
        {
            return Err(DomainError::AlreadyFollowing);
        }
        let startup = state
            .startups
            .iter_mut()
            .find(|s| s.id == follow.startup_id)
            .ok_or(DomainError::StartupNotFound(follow.startup_id))?;
        startup.follower_count += 1;
        state.follows.push(follow.clone());
        Ok(())
    }

    async fn delete(&self, follower_id: Uuid, startup_id: Uuid) -> RepoResult<()> {
        let mut state = self.state();
        let index = state
            .follows
            .iter()
            .position(|f| f.follower_id == follower_id && f.startup_id == startup_id)
            .ok_or(DomainError::FollowNotFound)?;
        state.follows.remove(index);
        if let Some(startup) = state.startups.iter_mut().find(|s| s.id == startup_id) {
            startup.follower_count = (startup.follower_count - 1).max(0);
        }
        Ok(())
    }
}

/// Cache store whose every operation fails
pub(crate) struct BrokenCache;

fn unreachable_cache() -> CacheError {
    CacheError::CreatePool("connection refused".to_string())
}

#[async_trait]
impl CacheStore for BrokenCache {
    fn backend(&self) -> &'static str {
        "broken"
    }
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(unreachable_cache())
    }
    async fn set(&self, _key: &str, _value: &str, _ttl: Option<u64>) -> CacheResult<()> {
        Err(unreachable_cache())
    }
    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(unreachable_cache())
    }
    async fn delete_matching(&self, _pattern: &str) -> CacheResult<u64> {
        Err(unreachable_cache())
    }
    async fn ping(&self) -> CacheResult<()> {
        Err(unreachable_cache())
    }
}

/// Context over a fake store and the given cache
pub(crate) fn context(store: &Arc<FakeStore>, cache: Cache) -> ServiceContext {
    ServiceContext::builder()
        .reel_repo(store.clone())
        .like_repo(store.clone())
        .comment_repo(store.clone())
        .share_repo(store.clone())
        .startup_repo(store.clone())
        .follow_repo(store.clone())
        .cache(cache)
        .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
        .build()
        .unwrap()
}
