use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Each one mirrors an environment variable and a
/// config file key; environment variables take precedence over flags.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "relnotes")]
#[command(about = "Fetch GitHub release notes and save them as markdown files")]
#[command(version)]
pub struct Cli {
    /// Comma-separated list of repositories (owner/repo)
    #[arg(long, value_name = "OWNER/REPO,...")]
    pub repos: Option<String>,

    /// Path to store release note files
    #[arg(long, value_name = "PATH")]
    pub artifacts_path: Option<PathBuf>,

    /// Fetch all historical releases instead of only the latest ones
    #[arg(long)]
    pub history: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Artifacts of a monorepo, e.g. `ethereum-optimism/optimism=op-node,op-batcher`
    #[arg(long = "monorepo", value_name = "OWNER/REPO=ARTIFACT,...")]
    pub monorepos: Vec<String>,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to read instead of ./repos.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
