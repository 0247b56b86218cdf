use crate::github::types::GitHubRelease;

/// Which artifact a release belongs to, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactMatch {
    /// A configured artifact name appears in the release name, tag or body
    Configured(String),
    /// The part of the tag before the first `/`, e.g. `op-node` in `op-node/v1.10.2`
    TagPrefix(String),
    /// Neither applies; the release belongs to the repository itself
    Default,
}

impl ArtifactMatch {
    /// The artifact key (empty for [`ArtifactMatch::Default`])
    pub fn key(&self) -> &str {
        match self {
            ArtifactMatch::Configured(key) | ArtifactMatch::TagPrefix(key) => key,
            ArtifactMatch::Default => "",
        }
    }
}

/// Assigns releases to artifacts using a repository's allow-list
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    /// `(configured key, lowercase key)`, empty keys removed, list order kept
    configured: Vec<(String, String)>,
}

impl ArtifactClassifier {
    pub fn new(configured: &[String]) -> Self {
        Self {
            configured: configured
                .iter()
                .filter(|key| !key.is_empty())
                .map(|key| (key.clone(), key.to_lowercase()))
                .collect(),
        }
    }

    /// Classify one release.
    ///
    /// Configured keys are tried in list order and the first whose lowercase
    /// form is contained in the name, the tag or the body wins. Otherwise a
    /// tag containing `/` yields its prefix, and anything else falls back to
    /// the empty key.
    pub fn classify(&self, release: &GitHubRelease) -> ArtifactMatch {
        let name = release.name.as_deref().unwrap_or_default().to_lowercase();
        let tag = release.tag_name.to_lowercase();
        let body = release.body.as_deref().unwrap_or_default().to_lowercase();

        let configured = self.configured.iter().find(|(_, lowered)| {
            name.contains(lowered.as_str())
                || tag.contains(lowered.as_str())
                || body.contains(lowered.as_str())
        });
        if let Some((key, _)) = configured {
            return ArtifactMatch::Configured(key.clone());
        }

        match release.tag_name.split_once('/') {
            Some((prefix, _)) if !prefix.is_empty() => ArtifactMatch::TagPrefix(prefix.to_string()),
            _ => ArtifactMatch::Default,
        }
    }
}
