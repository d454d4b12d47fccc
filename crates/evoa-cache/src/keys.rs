//! Cache key builders
//!
//! Feed pages are stored under
//! `feed:{for_you|following}:{viewer_id}:{cursor|start}:{limit}`; the
//! per-viewer patterns below match every page of one feed kind.

use evoa_core::{FeedCursor, FeedKind};
use uuid::Uuid;

/// Featured reels listing on the explore surface
pub const BATTLEGROUND_KEY: &str = "battleground:live";

/// Startups ranked by followers
pub const TOP_STARTUPS_KEY: &str = "top:startups";

/// Startups created in the last week, ranked by followers
pub const WEEKLY_STARTUPS_KEY: &str = "startups:week";

/// Key of one cached feed page
pub fn feed_page_key(kind: FeedKind, viewer_id: Uuid, cursor: Option<&FeedCursor>, limit: i64) -> String {
    let cursor = cursor.map_or_else(|| "start".to_string(), FeedCursor::encode);
    format!("feed:{kind}:{viewer_id}:{cursor}:{limit}")
}

/// Glob pattern matching every cached page of one viewer's feed
pub fn viewer_feed_pattern(kind: FeedKind, viewer_id: Uuid) -> String {
    format!("feed:{kind}:{viewer_id}:*")
}
