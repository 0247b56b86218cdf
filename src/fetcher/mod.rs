//! Fetch orchestration
//!
//! Drives one repository at a time: page through its releases, classify
//! them into artifacts, write the retained ones to disk and report a
//! summary. Failures are contained to the repository they happen in.

pub mod summary;

pub use summary::{ArtifactSummary, RepositorySummary, WriteCounts};

use crate::artifacts::{AggregationMode, ArtifactAccumulator, Progress, ReleaseAggregator};
use crate::config::Settings;
use crate::core::{RelnotesError, RepositoryTarget};
use crate::di::{ReleaseSource, ServiceContainer};
use crate::github::{describe_reset, format_reset_time, RateLimit, PAGE_SIZE};
use crate::writer::ReleaseWriter;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Quota below which a warning is emitted before fetching
pub const LOW_RATE_LIMIT_THRESHOLD: u64 = 100;

/// Why paging stopped for a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Every known artifact has its latest stable and pre-release
    Complete,
    /// The listing ran out of pages
    Exhausted,
    /// The quota ran out; results gathered so far are kept
    RateLimited { reset: Option<u64> },
    /// The first page was empty
    NoReleases,
    /// A request failed; nothing from this repository is kept
    Failed(String),
}

/// Releases gathered for one repository
#[derive(Debug, Clone)]
pub struct RepositoryReleases {
    pub accumulator: ArtifactAccumulator,
    pub status: FetchStatus,
}

impl RepositoryReleases {
    fn neutral(mode: AggregationMode, status: FetchStatus) -> Self {
        Self {
            accumulator: ArtifactAccumulator::neutral(mode),
            status,
        }
    }
}

/// Fetches, classifies and saves release notes for the configured repositories
pub struct ReleaseFetcher {
    settings: Arc<Settings>,
    source: Arc<dyn ReleaseSource>,
    writer: ReleaseWriter,
    rate_limit_checked: bool,
}

impl ReleaseFetcher {
    pub fn new(container: &ServiceContainer) -> Self {
        Self {
            writer: ReleaseWriter::new(container.settings.artifacts_root.clone()),
            settings: Arc::clone(&container.settings),
            source: Arc::clone(&container.release_source),
            rate_limit_checked: false,
        }
    }

    /// Process every configured repository in order and print its summary
    pub async fn run(&mut self) -> Vec<RepositorySummary> {
        if !self.source.has_token() {
            warn!("No GITHUB_TOKEN found. API rate limits will be restricted.");
            warn!("Set GITHUB_TOKEN environment variable to increase rate limits.");
        }

        let repositories = self.settings.repositories.clone();
        let mut summaries = Vec::with_capacity(repositories.len());
        for repository in &repositories {
            println!("\nProcessing repository: {}", repository);
            if let Some(summary) = self.process_repository(repository).await {
                println!("\n{}", summary);
                summaries.push(summary);
            }
        }
        summaries
    }

    /// Fetch and save one repository.
    ///
    /// Returns `None` when the identifier is malformed; the error is logged
    /// and the batch moves on.
    pub async fn process_repository(&mut self, repository: &str) -> Option<RepositorySummary> {
        let target = match RepositoryTarget::parse(repository) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                return None;
            }
        };

        self.check_rate_limit().await;

        let configured = self.settings.artifacts_for(repository).to_vec();
        if !configured.is_empty() {
            debug!("Configured artifacts for {}: {:?}", target, configured);
        }

        let fetched = self.fetch_releases(&target, &configured).await;
        debug!("Stopped fetching {} ({:?})", target, fetched.status);

        Some(self.save_releases(&target, &fetched.accumulator))
    }

    /// Query the quota once per process.
    ///
    /// Returns the status when this call performed a successful query.
    pub async fn check_rate_limit(&mut self) -> Option<RateLimit> {
        if self.rate_limit_checked {
            return None;
        }
        self.rate_limit_checked = true;

        match self.source.rate_limit().await {
            Ok(rate) => {
                debug!(
                    "GitHub API rate limit: {}/{} remaining",
                    rate.remaining, rate.limit
                );
                if rate.remaining < LOW_RATE_LIMIT_THRESHOLD {
                    warn!(
                        "Only {} API calls remaining. Resets at {}",
                        rate.remaining,
                        format_reset_time(rate.reset)
                    );
                }
                Some(rate)
            }
            Err(e) => {
                warn!("Could not check rate limit status: {}", e);
                None
            }
        }
    }

    /// Page through a repository's releases until the aggregator is
    /// satisfied, the listing ends or the quota runs out.
    pub async fn fetch_releases(
        &self,
        target: &RepositoryTarget,
        configured: &[String],
    ) -> RepositoryReleases {
        let mode = self.settings.mode();
        let mut aggregator = ReleaseAggregator::new(mode, configured);
        let mut page = 1;

        loop {
            debug!("Fetching page {} for {}", page, target);
            let response = match self.source.releases_page(target, page, PAGE_SIZE).await {
                Ok(response) => response,
                Err(RelnotesError::RateLimited { reset }) => {
                    warn!(
                        "GitHub API rate limit reached while fetching {}. Resets at {}",
                        target,
                        describe_reset(reset)
                    );
                    if !self.source.has_token() {
                        info!("Tip: Set GITHUB_TOKEN environment variable to increase rate limits.");
                    }
                    return RepositoryReleases {
                        accumulator: aggregator.into_accumulator(),
                        status: FetchStatus::RateLimited { reset },
                    };
                }
                Err(e) => {
                    error!("Error fetching releases for {}: {}", target, e);
                    return RepositoryReleases::neutral(mode, FetchStatus::Failed(e.to_string()));
                }
            };

            if response.releases.is_empty() {
                if page == 1 {
                    warn!("No releases found for {}", target);
                    return RepositoryReleases::neutral(mode, FetchStatus::NoReleases);
                }
                break;
            }

            if aggregator.ingest_page(&response.releases) == Progress::Complete {
                return RepositoryReleases {
                    accumulator: aggregator.into_accumulator(),
                    status: FetchStatus::Complete,
                };
            }

            if response.releases.len() < PAGE_SIZE as usize {
                break;
            }

            if response.remaining.is_some_and(|remaining| remaining < 1) {
                warn!(
                    "GitHub API rate limit reached. Resets at {}",
                    describe_reset(response.reset)
                );
                return RepositoryReleases {
                    accumulator: aggregator.into_accumulator(),
                    status: FetchStatus::RateLimited {
                        reset: response.reset,
                    },
                };
            }

            page += 1;
        }

        RepositoryReleases {
            accumulator: aggregator.into_accumulator(),
            status: FetchStatus::Exhausted,
        }
    }

    /// Write every retained release and tally the outcomes per artifact
    pub fn save_releases(
        &self,
        target: &RepositoryTarget,
        accumulator: &ArtifactAccumulator,
    ) -> RepositorySummary {
        let artifacts = accumulator
            .iter()
            .map(|(artifact, releases)| {
                let mut counts = WriteCounts::default();
                for release in releases.releases() {
                    counts.record(&self.writer.write(target, artifact, release));
                }
                ArtifactSummary::new(artifact, counts, releases)
            })
            .collect();

        RepositorySummary {
            repository: target.to_string(),
            artifacts,
        }
    }
}
