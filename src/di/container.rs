//! Service container for dependency injection

use super::traits::ReleaseSource;
use crate::config::Settings;
use crate::core::RelnotesResult;
use crate::github::{ClientConfig, GitHubClient};
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the resolved settings and the release source behind a trait
/// object, so tests can swap in [`MockReleaseSource`](super::mocks::MockReleaseSource).
///
/// # Example (Testing)
///
/// ```
/// use relnotes::config::Settings;
/// use relnotes::di::{mocks::MockReleaseSource, ReleaseSource, ServiceContainer};
/// use std::sync::Arc;
///
/// let settings = Settings::default();
/// let source = Arc::new(MockReleaseSource::new());
/// let container = ServiceContainer::with_providers(settings, source);
/// assert!(container.release_source.has_token());
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub settings: Arc<Settings>,
    pub release_source: Arc<dyn ReleaseSource>,
}

impl ServiceContainer {
    /// Create a new service container backed by the GitHub API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, e.g. because the
    /// token contains characters that are not valid in a header.
    pub fn new(settings: Settings) -> RelnotesResult<Self> {
        let client = GitHubClient::new(ClientConfig::from_settings(&settings))?;

        Ok(Self {
            settings: Arc::new(settings),
            release_source: Arc::new(client),
        })
    }

    /// Create a service container with a custom release source
    pub fn with_providers(settings: Settings, release_source: Arc<dyn ReleaseSource>) -> Self {
        Self {
            settings: Arc::new(settings),
            release_source,
        }
    }
}
