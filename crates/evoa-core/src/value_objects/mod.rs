//! Value objects - immutable types that represent domain concepts

mod feed_cursor;
mod feed_kind;

pub use feed_cursor::{now_micros, CursorParseError, FeedCursor};
pub use feed_kind::FeedKind;
