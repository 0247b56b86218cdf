use super::release::ReleaseInfo;
use indexmap::IndexMap;

/// How releases are retained per artifact, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationMode {
    /// First stable and first pre-release per artifact
    #[default]
    LatestOnly,
    /// Every non-draft release per artifact
    History,
}

impl AggregationMode {
    pub fn from_history_flag(history: bool) -> Self {
        if history {
            AggregationMode::History
        } else {
            AggregationMode::LatestOnly
        }
    }
}

/// Releases retained for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactReleases {
    Latest {
        stable: Option<ReleaseInfo>,
        prerelease: Option<ReleaseInfo>,
    },
    History(Vec<ReleaseInfo>),
}

impl ArtifactReleases {
    pub fn empty(mode: AggregationMode) -> Self {
        match mode {
            AggregationMode::LatestOnly => ArtifactReleases::Latest {
                stable: None,
                prerelease: None,
            },
            AggregationMode::History => ArtifactReleases::History(Vec::new()),
        }
    }

    /// Store a release. Returns `false` when a latest slot was already taken.
    fn store(&mut self, release: ReleaseInfo) -> bool {
        match self {
            ArtifactReleases::History(releases) => {
                releases.push(release);
                true
            }
            ArtifactReleases::Latest { prerelease, .. }
                if release.is_prerelease && prerelease.is_none() =>
            {
                *prerelease = Some(release);
                true
            }
            ArtifactReleases::Latest { stable, .. }
                if !release.is_prerelease && stable.is_none() =>
            {
                *stable = Some(release);
                true
            }
            ArtifactReleases::Latest { .. } => false,
        }
    }

    /// Both latest slots filled. History is never complete.
    pub fn is_complete(&self) -> bool {
        match self {
            ArtifactReleases::Latest { stable, prerelease } => {
                stable.is_some() && prerelease.is_some()
            }
            ArtifactReleases::History(_) => false,
        }
    }

    /// Retained releases: stable before pre-release, or history in arrival order
    pub fn releases(&self) -> Vec<&ReleaseInfo> {
        match self {
            ArtifactReleases::Latest { stable, prerelease } => {
                stable.iter().chain(prerelease.iter()).collect()
            }
            ArtifactReleases::History(releases) => releases.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.releases().is_empty()
    }
}

/// Per-artifact release slots for one repository, in the order artifacts
/// were configured or discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactAccumulator {
    mode: AggregationMode,
    slots: IndexMap<String, ArtifactReleases>,
}

impl ArtifactAccumulator {
    /// Create slots for the configured artifacts.
    ///
    /// An empty allow-list means a plain repository and seeds the empty key.
    pub fn new(mode: AggregationMode, configured: &[String]) -> Self {
        let mut accumulator = Self {
            mode,
            slots: IndexMap::new(),
        };

        if configured.is_empty() {
            accumulator.ensure_slot("");
        }
        for key in configured {
            accumulator.ensure_slot(key);
        }
        accumulator
    }

    /// The result for a repository with no releases or a failed fetch:
    /// a single, empty, unnamed artifact.
    pub fn neutral(mode: AggregationMode) -> Self {
        Self::new(mode, &[])
    }

    /// Add an empty slot for `key` unless one exists
    pub fn ensure_slot(&mut self, key: &str) {
        if !self.slots.contains_key(key) {
            self.slots
                .insert(key.to_string(), ArtifactReleases::empty(self.mode));
        }
    }

    /// Store a release under `key`, creating the slot if needed.
    ///
    /// Returns `false` if the release was discarded because the latest
    /// slot of its category is already filled.
    pub fn store(&mut self, key: &str, release: ReleaseInfo) -> bool {
        self.ensure_slot(key);
        match self.slots.get_mut(key) {
            Some(slot) => slot.store(release),
            None => false,
        }
    }

    /// Every known artifact has both a stable and a pre-release.
    /// Always `false` in history mode.
    pub fn is_complete(&self) -> bool {
        self.mode == AggregationMode::LatestOnly
            && !self.slots.is_empty()
            && self.slots.values().all(ArtifactReleases::is_complete)
    }

    pub fn get(&self, key: &str) -> Option<&ArtifactReleases> {
        self.slots.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArtifactReleases)> {
        self.slots.iter().map(|(key, slot)| (key.as_str(), slot))
    }
}
