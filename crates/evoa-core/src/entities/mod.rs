//! Domain entities - core business objects

mod comment;
mod follow;
mod like;
mod reel;
mod share;
mod startup;

pub use comment::ReelComment;
pub use follow::Follow;
pub use like::ReelLike;
pub use reel::Reel;
pub use share::ReelShare;
pub use startup::Startup;
