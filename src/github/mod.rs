//! GitHub integration
//!
//! This module provides the HTTP side of release fetching:
//! - Listing releases one page at a time
//! - Reading the rate limit status and quota headers

pub mod client;
pub mod types;

pub use client::{ClientConfig, GitHubClient, DEFAULT_API_URL, PAGE_SIZE};
pub use types::{describe_reset, format_reset_time, GitHubRelease, RateLimit, ReleasePage};
