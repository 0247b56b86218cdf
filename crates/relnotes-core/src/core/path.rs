use crate::core::error::RelnotesResult;
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["repos.yaml", "repos.yml"];

/// Find the config file to read.
///
/// An explicitly requested path wins when it exists; otherwise the first
/// of [`CONFIG_FILE_NAMES`] found in `dir` is used.
pub fn find_config_file(dir: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.is_file().then(|| path.to_path_buf());
    }

    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Ensure a directory exists, creating parents as needed
pub fn ensure_dir(path: &Path) -> RelnotesResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("owner").join("repo");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call is a no-op
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_find_config_file_prefers_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("repos.yml"), "{}").unwrap();
        fs::write(temp.path().join("repos.yaml"), "{}").unwrap();

        let found = find_config_file(temp.path(), None).unwrap();
        assert_eq!(found, temp.path().join("repos.yaml"));
    }

    #[test]
    fn test_find_config_file_explicit() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.yaml");
        fs::write(&custom, "{}").unwrap();
        fs::write(temp.path().join("repos.yaml"), "{}").unwrap();

        assert_eq!(find_config_file(temp.path(), Some(&custom)), Some(custom));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file(temp.path(), None).is_none());
        assert!(find_config_file(temp.path(), Some(&temp.path().join("nope.yaml"))).is_none());
    }
}
