//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod reel;
mod startup;

pub use comment::CommentModel;
pub use reel::ReelModel;
pub use startup::StartupModel;
