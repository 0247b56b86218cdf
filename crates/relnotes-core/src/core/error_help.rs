//! Human-friendly rendering of errors that reach the top level.

use super::error::RelnotesError;

/// Format an error together with a suggestion on how to fix it, if one is known.
pub fn format_error_with_help(err: &RelnotesError) -> String {
    match help_for(err) {
        Some(help) => format!("Error: {}\n\n  Help: {}", err, help),
        None => format!("Error: {}", err),
    }
}

fn help_for(err: &RelnotesError) -> Option<&'static str> {
    match err {
        RelnotesError::Config(msg) if msg.contains("repositories") => Some(
            "Set GITHUB_REPOS=owner/repo, pass --repos owner/repo, \
             or add a repositories section to repos.yaml",
        ),
        RelnotesError::Config(msg) if msg.contains("token") => {
            Some("Check that GITHUB_TOKEN contains only printable ASCII characters")
        }
        RelnotesError::Repository(_) => Some("Repositories are written as owner/repo"),
        RelnotesError::RateLimited { .. } => {
            Some("Set GITHUB_TOKEN to raise the limit to 5,000 requests per hour")
        }
        _ => None,
    }
}
