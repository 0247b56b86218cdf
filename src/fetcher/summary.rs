use crate::artifacts::{ArtifactReleases, ReleaseInfo};
use crate::writer::WriteOutcome;
use std::fmt;

/// Files written and left alone for one artifact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteCounts {
    pub written: usize,
    /// Existing files plus writes that failed
    pub unchanged: usize,
}

impl WriteCounts {
    pub fn record(&mut self, outcome: &WriteOutcome) {
        if outcome.is_written() {
            self.written += 1;
        } else {
            self.unchanged += 1;
        }
    }
}

/// Counts and tags reported for one artifact. Release bodies are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSummary {
    /// Artifact key, empty for the repository itself
    pub artifact: String,
    pub counts: WriteCounts,
    pub latest_stable: Option<String>,
    pub latest_prerelease: Option<String>,
    /// Newest release in history mode
    pub latest: Option<String>,
}

impl ArtifactSummary {
    pub fn new(artifact: &str, counts: WriteCounts, releases: &ArtifactReleases) -> Self {
        let tag = |release: &Option<ReleaseInfo>| release.as_ref().map(|r| r.tag.clone());
        match releases {
            ArtifactReleases::Latest { stable, prerelease } => Self {
                artifact: artifact.to_string(),
                counts,
                latest_stable: tag(stable),
                latest_prerelease: tag(prerelease),
                latest: None,
            },
            ArtifactReleases::History(history) => Self {
                artifact: artifact.to_string(),
                counts,
                latest: history.first().map(|r| r.tag.clone()),
                ..Default::default()
            },
        }
    }
}

/// What one repository run produced, printed after the repository is done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub repository: String,
    pub artifacts: Vec<ArtifactSummary>,
}

impl RepositorySummary {
    pub fn total_written(&self) -> usize {
        self.artifacts.iter().map(|a| a.counts.written).sum()
    }

    pub fn total_unchanged(&self) -> usize {
        self.artifacts.iter().map(|a| a.counts.unchanged).sum()
    }

    pub fn artifact(&self, key: &str) -> Option<&ArtifactSummary> {
        self.artifacts.iter().find(|a| a.artifact == key)
    }
}

impl fmt::Display for RepositorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary for {}:", self.repository)?;
        for artifact in &self.artifacts {
            if artifact.artifact.is_empty() {
                writeln!(f, "  ")?;
            } else {
                writeln!(f, "  {}/", artifact.artifact)?;
            }
            writeln!(
                f,
                "    Files: {} written, {} unchanged",
                artifact.counts.written, artifact.counts.unchanged
            )?;

            if let Some(latest) = &artifact.latest {
                writeln!(f, "    Latest: {}", latest)?;
            }
            if let Some(stable) = &artifact.latest_stable {
                writeln!(f, "    Latest stable: {}", stable)?;
            }
            if let Some(prerelease) = &artifact.latest_prerelease {
                writeln!(f, "    Latest pre-release: {}", prerelease)?;
            }
        }
        Ok(())
    }
}
