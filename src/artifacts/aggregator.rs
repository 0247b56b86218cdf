use super::accumulator::{AggregationMode, ArtifactAccumulator};
use super::classifier::{ArtifactClassifier, ArtifactMatch};
use super::release::ReleaseInfo;
use crate::github::types::GitHubRelease;
use tracing::debug;

/// Whether more pages are needed after ingesting one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NeedMore,
    /// Every known artifact has its latest stable and pre-release
    Complete,
}

/// Classifies and accumulates the releases of one repository, page by page
#[derive(Debug, Clone)]
pub struct ReleaseAggregator {
    classifier: ArtifactClassifier,
    accumulator: ArtifactAccumulator,
}

impl ReleaseAggregator {
    pub fn new(mode: AggregationMode, configured: &[String]) -> Self {
        Self {
            classifier: ArtifactClassifier::new(configured),
            accumulator: ArtifactAccumulator::new(mode, configured),
        }
    }

    /// Ingest one page of releases in arrival order.
    ///
    /// Drafts are skipped. In latest-only mode the completeness check runs
    /// after every release, and the rest of the page is ignored once it
    /// holds; a key discovered later in the page would not have been seen.
    pub fn ingest_page(&mut self, releases: &[GitHubRelease]) -> Progress {
        for release in releases {
            self.ingest(release);

            if self.accumulator.is_complete() {
                debug!("Found all needed releases, stopping pagination");
                return Progress::Complete;
            }
        }
        Progress::NeedMore
    }

    /// Classify and store a single release. Returns the match, or `None` for drafts.
    pub fn ingest(&mut self, release: &GitHubRelease) -> Option<ArtifactMatch> {
        if release.draft {
            debug!("Skipping draft release {}", release.tag_name);
            return None;
        }

        let artifact = self.classifier.classify(release);
        match &artifact {
            ArtifactMatch::Configured(key) => debug!(
                "Matched release {} to configured artifact {}",
                release.tag_name, key
            ),
            ArtifactMatch::TagPrefix(key) => debug!(
                "Extracted artifact {} from tag {}",
                key, release.tag_name
            ),
            ArtifactMatch::Default => {}
        }

        if !self
            .accumulator
            .store(artifact.key(), ReleaseInfo::from(release))
        {
            debug!(
                "Discarding {}: a newer release of the same kind is already kept",
                release.tag_name
            );
        }
        Some(artifact)
    }

    pub fn is_complete(&self) -> bool {
        self.accumulator.is_complete()
    }

    pub fn accumulator(&self) -> &ArtifactAccumulator {
        &self.accumulator
    }

    pub fn into_accumulator(self) -> ArtifactAccumulator {
        self.accumulator
    }
}
