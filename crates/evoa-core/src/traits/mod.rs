//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, FeedQuery, FollowRepository, LikeRepository, ReelRepository, RepoResult,
    ShareRepository, StartupRepository,
};
