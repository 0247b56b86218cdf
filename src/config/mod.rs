//! Configuration resolution.
//!
//! Every setting is looked up in four layers, highest priority first:
//! environment variable, command-line flag, config file, built-in default.
//! The first layer that has a value wins and the rest are not consulted.

pub mod cli;
pub mod file;

pub use cli::Cli;
pub use file::ConfigFile;

use crate::artifacts::AggregationMode;
use crate::core::{RelnotesError, RelnotesResult};
use crate::di::EnvProvider;
use crate::github::DEFAULT_API_URL;
use indexmap::IndexMap;
use std::path::PathBuf;
use tracing::warn;

pub const REPOS_ENV: &str = "GITHUB_REPOS";
pub const ARTIFACTS_PATH_ENV: &str = "ARTIFACTS_PATH";
pub const HISTORY_ENV: &str = "ARTIFACT_HISTORY";
pub const DEBUG_ENV: &str = "GITHUB_RELEASES_DEBUG";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";
pub const MONOREPO_ENV_PREFIX: &str = "MONOREPO_ARTIFACTS_";

pub const DEFAULT_ARTIFACTS_PATH: &str = "artifacts";

/// One layer of the lookup chain
type Source<'a, T> = &'a dyn Fn() -> Option<T>;

/// Resolved configuration for a run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repositories as written by the user (`owner/repo`), in order
    pub repositories: Vec<String>,
    pub artifacts_root: PathBuf,
    pub history: bool,
    pub debug: bool,
    /// Artifact allow-lists keyed by repository; repositories without one are absent
    pub monorepos: IndexMap<String, Vec<String>>,
    pub api_url: String,
    pub token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repositories: Vec::new(),
            artifacts_root: PathBuf::from(DEFAULT_ARTIFACTS_PATH),
            history: false,
            debug: false,
            monorepos: IndexMap::new(),
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl Settings {
    /// Resolve all settings from the environment, flags and config file
    ///
    /// # Errors
    ///
    /// Returns [`RelnotesError::Config`] when no layer names any repository.
    pub fn resolve(
        env: &dyn EnvProvider,
        cli: &Cli,
        file: Option<&ConfigFile>,
    ) -> RelnotesResult<Self> {
        let repositories = first_present::<Vec<String>>(&[
            &|| env_text(env, REPOS_ENV).and_then(|v| non_empty(split_list(&v))),
            &|| cli.repos.as_deref().and_then(|v| non_empty(split_list(v))),
            &|| file.and_then(ConfigFile::repositories).and_then(non_empty),
        ])
        .ok_or_else(|| {
            RelnotesError::Config(
                "No repositories specified. Please use environment variable, config file, or --repos argument."
                    .to_string(),
            )
        })?;

        let artifacts_root = first_present::<PathBuf>(&[
            &|| env_text(env, ARTIFACTS_PATH_ENV).map(PathBuf::from),
            &|| cli.artifacts_path.clone(),
            &|| file.and_then(ConfigFile::artifacts_path).map(PathBuf::from),
        ])
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_PATH));

        let history = resolve_flag(
            env,
            HISTORY_ENV,
            cli.history,
            file.and_then(ConfigFile::history),
        );

        let api_url = first_present::<String>(&[
            &|| env_text(env, API_URL_ENV),
            &|| cli.api_url.clone(),
            &|| file.and_then(ConfigFile::api_url),
        ])
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let cli_monorepos = parse_monorepo_flags(&cli.monorepos);
        let mut monorepos = IndexMap::new();
        for repository in &repositories {
            let artifacts = first_present::<Vec<String>>(&[
                &|| {
                    env_text(env, &monorepo_env_var(repository))
                        .or_else(|| env_text(env, &legacy_monorepo_env_var(repository)))
                        .and_then(|v| non_empty(split_list(&v)))
                },
                &|| cli_monorepos.get(repository).cloned().and_then(non_empty),
                &|| file.and_then(|f| f.monorepo_artifacts(repository)).and_then(non_empty),
            ]);
            if let Some(artifacts) = artifacts {
                monorepos.insert(repository.clone(), artifacts);
            }
        }

        Ok(Self {
            repositories,
            artifacts_root,
            history,
            debug: resolve_debug(env, cli, file),
            monorepos,
            api_url,
            token: env_text(env, TOKEN_ENV),
        })
    }

    /// Configured artifact allow-list for a repository (empty when none)
    pub fn artifacts_for(&self, repository: &str) -> &[String] {
        self.monorepos
            .get(repository.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn mode(&self) -> AggregationMode {
        AggregationMode::from_history_flag(self.history)
    }
}

/// Resolve only the debug flag.
///
/// Needed before the full resolution so logging can be set up first.
pub fn resolve_debug(env: &dyn EnvProvider, cli: &Cli, file: Option<&ConfigFile>) -> bool {
    resolve_flag(env, DEBUG_ENV, cli.debug, file.and_then(ConfigFile::debug))
}

fn resolve_flag(
    env: &dyn EnvProvider,
    var: &str,
    flag_passed: bool,
    file_value: Option<bool>,
) -> bool {
    first_present::<bool>(&[
        &|| env.var(var).map(|v| parse_bool(&v)),
        &|| flag_passed.then_some(true),
        &|| file_value,
    ])
    .unwrap_or(false)
}

fn first_present<T>(sources: &[Source<'_, T>]) -> Option<T> {
    sources.iter().find_map(|source| source())
}

/// Environment variable, treating an empty value as unset
fn env_text(env: &dyn EnvProvider, key: &str) -> Option<String> {
    env.var(key).filter(|v| !v.trim().is_empty())
}

fn non_empty(list: Vec<String>) -> Option<Vec<String>> {
    (!list.is_empty()).then_some(list)
}

/// Interpret a string as a boolean (`true`, `1`, `yes`, `on`; case-insensitive)
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Environment variable holding the artifact list of a repository,
/// e.g. `MONOREPO_ARTIFACTS_ETHEREUM_OPTIMISM_OPTIMISM`
pub fn monorepo_env_var(repository: &str) -> String {
    let sanitized: String = repository
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", MONOREPO_ENV_PREFIX, sanitized)
}

/// Older spelling of [`monorepo_env_var`] that only replaces the `/`,
/// e.g. `MONOREPO_ARTIFACTS_ETHEREUM-OPTIMISM_OPTIMISM`
pub fn legacy_monorepo_env_var(repository: &str) -> String {
    format!(
        "{}{}",
        MONOREPO_ENV_PREFIX,
        repository.trim().replace('/', "_").to_uppercase()
    )
}

/// Parse repeated `--monorepo owner/repo=a,b` flags
fn parse_monorepo_flags(flags: &[String]) -> IndexMap<String, Vec<String>> {
    let mut monorepos = IndexMap::new();
    for flag in flags {
        match flag.split_once('=') {
            Some((repository, artifacts)) if !repository.trim().is_empty() => {
                monorepos.insert(repository.trim().to_string(), split_list(artifacts));
            }
            _ => warn!(
                "Ignoring --monorepo '{}'. Expected format: owner/repo=artifact1,artifact2",
                flag
            ),
        }
    }
    monorepos
}
