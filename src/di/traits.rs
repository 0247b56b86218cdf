//! Trait definitions for dependency injection

use crate::core::{RelnotesResult, RepositoryTarget};
use crate::github::types::{RateLimit, ReleasePage};
use async_trait::async_trait;

/// Trait for reading configuration from the process environment
///
/// Lets the configuration resolver be exercised without mutating
/// the real environment.
pub trait EnvProvider: Send + Sync {
    /// Get the value of an environment variable, if it is set
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by `std::env`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Trait for fetching release listings
///
/// Implemented by the GitHub client; the fetcher only talks to this trait.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Whether requests are authenticated
    fn has_token(&self) -> bool;

    /// Get the core rate limit status
    async fn rate_limit(&self) -> RelnotesResult<RateLimit>;

    /// Get one page of releases (1-based page numbers)
    async fn releases_page(
        &self,
        target: &RepositoryTarget,
        page: u32,
        per_page: u32,
    ) -> RelnotesResult<ReleasePage>;
}
