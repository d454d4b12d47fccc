//! Feed cursor - boundary between two feed pages
//!
//! Wire format:
//! - `2024-05-01T12:00:00.123456Z` - rows strictly older than the timestamp
//! - `2024-05-01T12:00:00.123456Z~<uuid>` - rows strictly before `(timestamp, id)`
//!   in `(created_at DESC, id DESC)` order
//!
//! The compound form is only emitted when the page boundary falls inside a run
//! of reels sharing one creation instant.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Separator between timestamp and id in a compound cursor
const ID_SEPARATOR: char = '~';

/// Current time truncated to the microsecond precision PostgreSQL stores
///
/// Cursors are rendered with microsecond precision, so every persisted
/// timestamp must round-trip through them exactly.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Opaque pagination cursor for reel feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedCursor {
    created_at: DateTime<Utc>,
    id: Option<Uuid>,
}

impl FeedCursor {
    /// Cursor selecting rows created strictly before `created_at`
    pub fn before(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            id: None,
        }
    }

    /// Cursor selecting rows ordered strictly after the row `(created_at, id)`
    pub fn before_row(created_at: DateTime<Utc>, id: Uuid) -> Self {
        Self {
            created_at,
            id: Some(id),
        }
    }

    /// Creation timestamp bound
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Secondary id bound, present only for compound cursors
    #[inline]
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Render the cursor in its wire format
    pub fn encode(&self) -> String {
        let ts = self.created_at.to_rfc3339_opts(SecondsFormat::Micros, true);
        match self.id {
            Some(id) => format!("{ts}{ID_SEPARATOR}{id}"),
            None => ts,
        }
    }

    /// Parse a cursor from its wire format
    ///
    /// Stored timestamps have microsecond precision. A finer timestamp is
    /// rounded up to the next microsecond and loses its id bound: every row
    /// at or before the truncated instant precedes it whatever its id.
    pub fn parse(s: &str) -> Result<Self, CursorParseError> {
        let (ts, id) = match s.split_once(ID_SEPARATOR) {
            Some((ts, id)) => {
                let id = Uuid::parse_str(id).map_err(|_| CursorParseError::InvalidId)?;
                (ts, Some(id))
            }
            None => (s, None),
        };

        let created_at = DateTime::parse_from_rfc3339(ts)
            .map_err(|_| CursorParseError::InvalidTimestamp)?
            .with_timezone(&Utc);

        if created_at.timestamp_subsec_nanos() % 1_000 != 0 {
            return Ok(Self::before(
                created_at.trunc_subsecs(6) + Duration::microseconds(1),
            ));
        }

        Ok(Self { created_at, id })
    }

    /// Whether a row at `(created_at, id)` lies on the next-page side of this cursor
    pub fn admits(&self, created_at: DateTime<Utc>, id: Uuid) -> bool {
        match self.id {
            Some(bound) => (created_at, id) < (self.created_at, bound),
            None => created_at < self.created_at,
        }
    }
}

/// Error when parsing a cursor from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorParseError {
    #[error("cursor timestamp is not a valid ISO-8601 date-time")]
    InvalidTimestamp,

    #[error("cursor id is not a valid UUID")]
    InvalidId,
}

impl fmt::Display for FeedCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for FeedCursor {
    type Err = CursorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedCursor::parse(s)
    }
}

impl Serialize for FeedCursor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for FeedCursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        FeedCursor::parse(&raw).map_err(serde::de::Error::custom)
    }
}
