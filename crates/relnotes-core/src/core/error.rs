use thiserror::Error;

pub type RelnotesResult<T> = Result<T, RelnotesError>;

#[derive(Error, Debug)]
pub enum RelnotesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A repository identifier that is not of the form `owner/repo`.
    #[error("Invalid repository format '{0}'. Expected format: owner/repo")]
    Repository(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    /// The API answered 403 with no remaining quota.
    /// `reset` is the unix timestamp at which the quota refills, when known.
    #[error("GitHub API rate limit reached")]
    RateLimited { reset: Option<u64> },
}
