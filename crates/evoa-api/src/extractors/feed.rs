//! Feed paging extractor
//!
//! Parses `type`, `cursor` and `limit` from the query string. A missing
//! `type` selects the For You feed and a missing `limit` means 20.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use evoa_core::{DomainError, FeedCursor, FeedKind};
use evoa_service::services::feed::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw feed query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FeedQueryParams {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Validated feed parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    pub kind: FeedKind,
    pub cursor: Option<FeedCursor>,
    pub limit: u32,
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            kind: FeedKind::default(),
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<FeedQueryParams> for FeedParams {
    type Error = ApiError;

    fn try_from(params: FeedQueryParams) -> Result<Self, Self::Error> {
        let kind = match present(params.kind) {
            None => FeedKind::default(),
            Some(raw) => FeedKind::ALL
                .into_iter()
                .find(|k| k.as_str() == raw)
                .ok_or_else(|| ApiError::invalid_query("type must be 'for_you' or 'following'"))?,
        };

        let cursor = present(params.cursor)
            .map(|raw| FeedCursor::parse(&raw).map_err(DomainError::from))
            .transpose()?;

        let limit = match present(params.limit) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|l| (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(l))
                .ok_or_else(|| {
                    ApiError::invalid_query(format!(
                        "limit must be an integer between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"
                    ))
                })?,
        };

        Ok(FeedParams { kind, cursor, limit })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FeedParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<FeedQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        FeedParams::try_from(params)
    }
}
