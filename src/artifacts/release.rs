use crate::github::types::GitHubRelease;

/// Body used when a release has no notes
pub const NO_RELEASE_NOTES: &str = "No release notes provided.";

/// The parts of a release that end up on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub tag: String,
    pub body: String,
    pub is_prerelease: bool,
}

impl ReleaseInfo {
    pub fn new(tag: impl Into<String>, body: impl Into<String>, is_prerelease: bool) -> Self {
        Self {
            tag: tag.into(),
            body: body.into(),
            is_prerelease,
        }
    }

    /// Human-readable release type used in file titles
    pub fn release_type(&self) -> &'static str {
        if self.is_prerelease {
            "Pre-release"
        } else {
            "Stable Release"
        }
    }
}

impl From<&GitHubRelease> for ReleaseInfo {
    fn from(release: &GitHubRelease) -> Self {
        let body = release
            .body
            .as_deref()
            .filter(|body| !body.is_empty())
            .unwrap_or(NO_RELEASE_NOTES);

        Self::new(release.tag_name.clone(), body, release.prerelease)
    }
}
