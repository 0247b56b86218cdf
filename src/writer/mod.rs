//! Writing release notes to disk
//!
//! Notes are laid out as `{root}/{owner}/{repo}/[{artifact}/]{tag}.md`.
//! Existing files are never touched, so repeated runs only add new notes.

use crate::artifacts::ReleaseInfo;
use crate::core::path::ensure_dir;
use crate::core::{RelnotesError, RelnotesResult, RepositoryTarget};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error};

/// What happened to one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// A file was already there and was left as is
    Unchanged(PathBuf),
    /// Writing failed; the error has been logged
    Failed,
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }
}

/// Writes release notes below an artifacts root directory
#[derive(Debug, Clone)]
pub struct ReleaseWriter {
    root: PathBuf,
}

impl ReleaseWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where a release of `artifact` is stored
    pub fn release_path(
        &self,
        target: &RepositoryTarget,
        artifact: &str,
        release: &ReleaseInfo,
    ) -> PathBuf {
        let mut dir = self.root.join(&target.owner).join(&target.repo);
        if !artifact.is_empty() {
            dir = dir.join(artifact);
        }
        dir.join(format!("{}.md", file_stem(artifact, &release.tag)))
    }

    /// Write a release unless its file already exists.
    ///
    /// Filesystem errors are logged with enough context to find the release
    /// and reported as [`WriteOutcome::Failed`]; they never abort the run.
    pub fn write(
        &self,
        target: &RepositoryTarget,
        artifact: &str,
        release: &ReleaseInfo,
    ) -> WriteOutcome {
        match self.try_write(target, artifact, release) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    "Error saving release notes: {} (owner={}, repo={}, artifact={}, tag={})",
                    e, target.owner, target.repo, artifact, release.tag
                );
                WriteOutcome::Failed
            }
        }
    }

    fn try_write(
        &self,
        target: &RepositoryTarget,
        artifact: &str,
        release: &ReleaseInfo,
    ) -> RelnotesResult<WriteOutcome> {
        let path = self.release_path(target, artifact, release);
        if !stays_under(&self.root, &path) {
            return Err(RelnotesError::Path(format!(
                "Refusing to write outside {}: {}",
                self.root.display(),
                path.display()
            )));
        }
        let dir = path
            .parent()
            .ok_or_else(|| RelnotesError::Path(format!("No parent for {}", path.display())))?;

        debug!("Creating directory structure at {}", dir.display());
        ensure_dir(dir)?;

        // create_new refuses to clobber a file that appeared since the path was computed
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Skipping existing file: {}", path.display());
                return Ok(WriteOutcome::Unchanged(path));
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(render(target, artifact, release).as_bytes())?;
        debug!("Saved release notes to: {}", path.display());
        Ok(WriteOutcome::Written(path))
    }
}

/// Only plain components between the root and the file
fn stays_under(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root).is_ok_and(|relative| {
        relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
    })
}

/// File name (without extension) for a tag: `op-node/v1.0.0` in artifact
/// `op-node` becomes `v1.0.0`; anything else is used verbatim.
pub fn file_stem<'a>(artifact: &str, tag: &'a str) -> &'a str {
    if artifact.is_empty() {
        return tag;
    }
    tag.strip_prefix(artifact)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(tag)
}

/// Markdown document for one release
pub fn render(target: &RepositoryTarget, artifact: &str, release: &ReleaseInfo) -> String {
    let mut full_path = target.to_string();
    if !artifact.is_empty() {
        full_path.push('/');
        full_path.push_str(artifact);
    }

    format!(
        "# {} - {} ({})\n\n## Release Notes\n\n{}\n",
        full_path,
        release.tag,
        release.release_type(),
        release.body
    )
}
