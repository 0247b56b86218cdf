//! Common utilities for integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in
const RELNOTES_ENV: &[&str] = &[
    "GITHUB_REPOS",
    "ARTIFACTS_PATH",
    "ARTIFACT_HISTORY",
    "GITHUB_RELEASES_DEBUG",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "RUST_LOG",
];

/// Isolated working directory for one test
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Default artifacts root, relative to the working directory
    pub fn artifacts(&self) -> PathBuf {
        self.temp.path().join("artifacts")
    }

    /// A relnotes command running in the test directory with a clean environment
    pub fn relnotes(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_relnotes"));
        cmd.current_dir(self.temp.path());
        for var in RELNOTES_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Same as [`TestContext::relnotes`], pointed at a mock API server
    pub fn relnotes_against(&self, api_url: &str) -> Command {
        let mut cmd = self.relnotes();
        cmd.env("GITHUB_API_URL", api_url);
        cmd
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.temp.path().join("repos.yaml"), content).unwrap();
    }
}
