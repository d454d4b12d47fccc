//! Axum extractors for request handling
//!
//! Custom extractors for authentication, feed paging, path IDs, and
//! validated bodies.

mod auth;
mod feed;
mod path;
mod validated;

pub use auth::AuthUser;
pub use feed::{FeedParams, FeedQueryParams};
pub use path::UuidPath;
pub use validated::{OptionalValidatedJson, ValidatedJson};
