//! The optional `repos.yaml` config file.
//!
//! ```yaml
//! repositories:
//!   repos: owner1/repo1,owner2/repo2
//! artifacts:
//!   path: ./release-notes
//!   history: true
//! settings:
//!   debug: false
//! monorepos:
//!   ethereum-optimism/optimism: [op-node, op-batcher]
//! ```

use crate::config::{parse_bool, split_list};
use crate::core::RelnotesResult;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub repositories: RepositoriesSection,
    pub artifacts: ArtifactsSection,
    pub settings: SettingsSection,
    /// Artifact allow-lists keyed by `owner/repo`
    pub monorepos: IndexMap<String, ListValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoriesSection {
    pub repos: Option<ListValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtifactsSection {
    pub path: Option<String>,
    pub history: Option<FlagValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsSection {
    pub debug: Option<FlagValue>,
    pub api_url: Option<String>,
}

/// A list written either as a comma-separated string or as a YAML sequence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Csv(String),
    Items(Vec<String>),
}

impl ListValue {
    pub fn to_list(&self) -> Vec<String> {
        match self {
            ListValue::Csv(csv) => split_list(csv),
            ListValue::Items(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A boolean that may also be written as `1`, `"yes"`, `"on"`, ...
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FlagValue {
    pub fn is_true(&self) -> bool {
        match self {
            FlagValue::Bool(value) => *value,
            FlagValue::Number(value) => *value == 1,
            FlagValue::Text(text) => parse_bool(text),
        }
    }
}

impl ConfigFile {
    /// Parse config file content
    pub fn parse(content: &str) -> RelnotesResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> RelnotesResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn repositories(&self) -> Option<Vec<String>> {
        self.repositories.repos.as_ref().map(ListValue::to_list)
    }

    pub fn artifacts_path(&self) -> Option<String> {
        self.artifacts.path.clone().filter(|path| !path.trim().is_empty())
    }

    pub fn history(&self) -> Option<bool> {
        self.artifacts.history.as_ref().map(FlagValue::is_true)
    }

    pub fn debug(&self) -> Option<bool> {
        self.settings.debug.as_ref().map(FlagValue::is_true)
    }

    pub fn api_url(&self) -> Option<String> {
        self.settings.api_url.clone().filter(|url| !url.trim().is_empty())
    }

    /// Artifact allow-list for one repository
    pub fn monorepo_artifacts(&self, repository: &str) -> Option<Vec<String>> {
        self.monorepos.get(repository).map(ListValue::to_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_file() {
        let config = ConfigFile::parse(
            r#"
repositories:
  repos: ethereum-optimism/optimism, owner/repo
artifacts:
  path: ./notes
  history: "yes"
settings:
  debug: true
  api_url: https://ghe.example.com/api/v3
monorepos:
  ethereum-optimism/optimism: op-node,op-batcher
  owner/repo: [cli, " server "]
"#,
        )
        .unwrap();

        assert_eq!(
            config.repositories().unwrap(),
            vec!["ethereum-optimism/optimism", "owner/repo"]
        );
        assert_eq!(config.artifacts_path().as_deref(), Some("./notes"));
        assert_eq!(config.history(), Some(true));
        assert_eq!(config.debug(), Some(true));
        assert_eq!(
            config.api_url().as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(
            config.monorepo_artifacts("ethereum-optimism/optimism").unwrap(),
            vec!["op-node", "op-batcher"]
        );
        assert_eq!(
            config.monorepo_artifacts("owner/repo").unwrap(),
            vec!["cli", "server"]
        );
        assert!(config.monorepo_artifacts("other/repo").is_none());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = ConfigFile::parse("artifacts:\n  history: 1\n").unwrap();

        assert!(config.repositories().is_none());
        assert!(config.artifacts_path().is_none());
        assert_eq!(config.history(), Some(true));
        assert!(config.debug().is_none());
    }

    #[test]
    fn test_flag_values() {
        assert!(FlagValue::Text("ON".to_string()).is_true());
        assert!(!FlagValue::Text("off".to_string()).is_true());
        assert!(!FlagValue::Number(0).is_true());
        assert!(!FlagValue::Bool(false).is_true());
    }

    #[test]
    fn test_parse_empty_file() {
        let config = ConfigFile::parse("  \n").unwrap();
        assert!(config.repositories().is_none());
    }

    #[test]
    fn test_parse_malformed_file() {
        assert!(ConfigFile::parse("repositories: [unclosed").is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repos.yaml");
        std::fs::write(&path, "repositories:\n  repos: [a/b]\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.repositories().unwrap(), vec!["a/b"]);
    }
}
