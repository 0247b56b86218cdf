use crate::core::error::{RelnotesError, RelnotesResult};
use std::fmt;
use std::str::FromStr;

/// A GitHub repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryTarget {
    pub owner: String,
    pub repo: String,
}

impl RepositoryTarget {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo`, ignoring surrounding whitespace.
    pub fn parse(value: &str) -> RelnotesResult<Self> {
        let trimmed = value.trim();
        let mut parts = trimmed.split('/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(RelnotesError::Repository(trimmed.to_string())),
        }
    }
}

impl FromStr for RepositoryTarget {
    type Err = RelnotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
