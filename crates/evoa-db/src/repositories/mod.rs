//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in evoa-core.

mod comment;
mod counters;
mod error;
mod follow;
mod like;
mod reel;
mod share;
mod startup;

pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use like::PgLikeRepository;
pub use reel::PgReelRepository;
pub use share::PgShareRepository;
pub use startup::PgStartupRepository;
