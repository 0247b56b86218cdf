//! Mock implementations of service traits for testing

use super::traits::{EnvProvider, ReleaseSource};
use crate::core::{RelnotesError, RelnotesResult, RepositoryTarget};
use crate::github::types::{GitHubRelease, RateLimit, ReleasePage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock environment for testing
///
/// # Example
///
/// ```
/// use relnotes::di::mocks::MockEnv;
/// use relnotes::di::EnvProvider;
///
/// let env = MockEnv::new().with("GITHUB_REPOS", "owner/repo");
/// assert_eq!(env.var("GITHUB_REPOS").as_deref(), Some("owner/repo"));
/// assert!(env.var("ARTIFACTS_PATH").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvProvider for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// What the mock source answers for one page request
#[derive(Debug, Clone)]
pub enum MockPage {
    Page(ReleasePage),
    RateLimited(Option<u64>),
    Fail(String),
}

/// Mock release source for testing
///
/// Pages are registered per repository in order; requests past the last
/// registered page get an empty page. Every request is recorded.
#[derive(Clone)]
pub struct MockReleaseSource {
    pages: Arc<Mutex<HashMap<String, Vec<MockPage>>>>,
    rate_limit: Arc<Mutex<Option<RateLimit>>>,
    requests: Arc<Mutex<Vec<(String, u32)>>>,
    rate_limit_calls: Arc<Mutex<usize>>,
    has_token: bool,
}

impl MockReleaseSource {
    /// Create a new mock source with no pages and a healthy quota
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            rate_limit: Arc::new(Mutex::new(Some(RateLimit {
                limit: 5000,
                remaining: 4999,
                reset: 1_700_000_000,
            }))),
            requests: Arc::new(Mutex::new(Vec::new())),
            rate_limit_calls: Arc::new(Mutex::new(0)),
            has_token: true,
        }
    }

    /// Mark the source as unauthenticated
    pub fn without_token(mut self) -> Self {
        self.has_token = false;
        self
    }

    /// Append a page of releases for a repository
    pub fn add_page(&self, repository: &str, releases: Vec<GitHubRelease>) {
        self.add_response(repository, MockPage::Page(ReleasePage::new(releases)));
    }

    /// Append an arbitrary response for a repository
    pub fn add_response(&self, repository: &str, response: MockPage) {
        self.pages
            .lock()
            .unwrap()
            .entry(repository.to_string())
            .or_default()
            .push(response);
    }

    /// Set the rate limit status; `None` makes the status query fail
    pub fn set_rate_limit(&self, rate_limit: Option<RateLimit>) {
        *self.rate_limit.lock().unwrap() = rate_limit;
    }

    /// Page requests made so far, as `(owner/repo, page)`
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }

    /// How many times the rate limit status was queried
    pub fn rate_limit_calls(&self) -> usize {
        *self.rate_limit_calls.lock().unwrap()
    }
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    fn has_token(&self) -> bool {
        self.has_token
    }

    async fn rate_limit(&self) -> RelnotesResult<RateLimit> {
        *self.rate_limit_calls.lock().unwrap() += 1;
        self.rate_limit
            .lock()
            .unwrap()
            .ok_or_else(|| RelnotesError::Api("rate limit status unavailable".to_string()))
    }

    async fn releases_page(
        &self,
        target: &RepositoryTarget,
        page: u32,
        _per_page: u32,
    ) -> RelnotesResult<ReleasePage> {
        let key = target.to_string();
        self.requests.lock().unwrap().push((key.clone(), page));

        let response = self
            .pages
            .lock()
            .unwrap()
            .get(&key)
            .and_then(|pages| {
                (page as usize)
                    .checked_sub(1)
                    .and_then(|i| pages.get(i))
                    .cloned()
            });

        match response {
            Some(MockPage::Page(page)) => Ok(page),
            Some(MockPage::RateLimited(reset)) => Err(RelnotesError::RateLimited { reset }),
            Some(MockPage::Fail(msg)) => Err(RelnotesError::Api(msg)),
            None => Ok(ReleasePage::default()),
        }
    }
}

/// Build a published release record
pub fn release(tag: &str, prerelease: bool) -> GitHubRelease {
    GitHubRelease {
        tag_name: tag.to_string(),
        name: None,
        body: Some(format!("Notes for {}", tag)),
        draft: false,
        prerelease,
    }
}

/// Build a draft release record
pub fn draft_release(tag: &str) -> GitHubRelease {
    GitHubRelease {
        draft: true,
        ..release(tag, false)
    }
}

/// Build `count` stable releases `{prefix}v0.0.{n}`
pub fn stable_releases(prefix: &str, count: usize) -> Vec<GitHubRelease> {
    (0..count)
        .map(|n| release(&format!("{}v0.0.{}", prefix, n), false))
        .collect()
}
