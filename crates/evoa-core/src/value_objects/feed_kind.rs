//! Feed kind - which population of reels a feed page is drawn from

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feed selector
///
/// - `ForYou`: every live reel, newest first
/// - `Following`: only reels of startups the viewer follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    #[default]
    ForYou,
    Following,
}

impl FeedKind {
    /// Wire/cache-key name of the feed kind
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ForYou => "for_you",
            Self::Following => "following",
        }
    }

    /// Every feed kind, used when invalidating all of a viewer's pages
    pub const ALL: [FeedKind; 2] = [FeedKind::ForYou, FeedKind::Following];
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
