//! # evoa-core
//!
//! Domain layer containing entities, value objects, and repository traits for
//! the reel feed and engagement subsystem.
//! This crate has zero dependencies on infrastructure (database, cache, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Follow, Reel, ReelComment, ReelLike, ReelShare, Startup};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FeedQuery, FollowRepository, LikeRepository, ReelRepository, RepoResult,
    ShareRepository, StartupRepository,
};
pub use value_objects::{now_micros, CursorParseError, FeedCursor, FeedKind};
