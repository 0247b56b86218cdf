//! GitHub API type definitions

use chrono::{DateTime, Local};
use serde::Deserialize;

/// GitHub release information, as returned by the releases listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}

/// One page of the releases listing plus the quota headers that came with it.
#[derive(Debug, Clone, Default)]
pub struct ReleasePage {
    pub releases: Vec<GitHubRelease>,
    /// `X-RateLimit-Remaining`, when the header was present
    pub remaining: Option<u64>,
    /// `X-RateLimit-Reset` as a unix timestamp
    pub reset: Option<u64>,
}

impl ReleasePage {
    pub fn new(releases: Vec<GitHubRelease>) -> Self {
        Self {
            releases,
            ..Default::default()
        }
    }
}

/// GitHub API rate limit information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

/// Body of `GET /rate_limit`; only the core bucket is relevant.
#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResources {
    pub core: RateLimit,
}

/// Render a rate-limit reset timestamp in local time.
pub fn format_reset_time(reset: u64) -> String {
    i64::try_from(reset)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| format!("timestamp {}", reset))
}

/// Like [`format_reset_time`], for resets that may not have been reported.
pub fn describe_reset(reset: Option<u64>) -> String {
    match reset {
        Some(reset) => format_reset_time(reset),
        None => "an unknown time".to_string(),
    }
}
