//! GitHub API client implementation

use crate::config::Settings;
use crate::core::{RelnotesError, RelnotesResult, RepositoryTarget};
use crate::di::traits::ReleaseSource;
use crate::github::types::{GitHubRelease, RateLimit, RateLimitResponse, ReleasePage};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub's maximum page size for the releases listing
pub const PAGE_SIZE: u32 = 100;

/// Everything the client needs to talk to the API.
///
/// Built once from the resolved settings so that credentials are never
/// read from the process environment behind the caller's back.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: "relnotes".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_url: settings.api_url.clone(),
            token: settings.token.clone(),
            ..Default::default()
        }
    }
}

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: ClientConfig) -> RelnotesResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| RelnotesError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| RelnotesError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelnotesError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    /// Get the current core rate limit for the calling credential
    pub async fn get_rate_limit(&self) -> RelnotesResult<RateLimit> {
        let url = format!("{}/rate_limit", self.api_url);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RelnotesError::Api(format!(
                "rate limit status: HTTP {}",
                response.status()
            )));
        }

        let body: RateLimitResponse = response.json().await.map_err(|e| {
            RelnotesError::Api(format!("Failed to parse rate limit response: {}", e))
        })?;
        Ok(body.resources.core)
    }

    /// Get one page of releases for a repository, newest first
    ///
    /// A 403 with an exhausted quota is reported as [`RelnotesError::RateLimited`]
    /// so callers can keep what they have gathered so far.
    pub async fn get_releases_page(
        &self,
        target: &RepositoryTarget,
        page: u32,
        per_page: u32,
    ) -> RelnotesResult<ReleasePage> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, target.owner, target.repo
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;

        let remaining = header_u64(response.headers(), "x-ratelimit-remaining");
        let reset = header_u64(response.headers(), "x-ratelimit-reset");

        if response.status() == StatusCode::FORBIDDEN && remaining == Some(0) {
            return Err(RelnotesError::RateLimited { reset });
        }

        if !response.status().is_success() {
            return Err(RelnotesError::Api(format!(
                "{} releases page {}: HTTP {}",
                target,
                page,
                response.status()
            )));
        }

        let releases: Vec<GitHubRelease> = response.json().await.map_err(|e| {
            RelnotesError::Api(format!("Failed to parse releases for {}: {}", target, e))
        })?;

        Ok(ReleasePage {
            releases,
            remaining,
            reset,
        })
    }
}

fn header_u64(headers: &header::HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

// Implement ReleaseSource trait
#[async_trait]
impl ReleaseSource for GitHubClient {
    fn has_token(&self) -> bool {
        self.token.is_some()
    }

    async fn rate_limit(&self) -> RelnotesResult<RateLimit> {
        self.get_rate_limit().await
    }

    async fn releases_page(
        &self,
        target: &RepositoryTarget,
        page: u32,
        per_page: u32,
    ) -> RelnotesResult<ReleasePage> {
        self.get_releases_page(target, page, per_page).await
    }
}
