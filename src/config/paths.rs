//! Path resolution for focuspulse configuration and log files.
//!
//! All focuspulse files live in `~/.focuspulse/` (or `$FOCUSPULSE_HOME`):
//! - `config.yaml` - Startup configuration
//! - `focuspulse.log` - Log output

use std::path::PathBuf;

use crate::error::FocusPulseError;

/// Environment variable that overrides the root directory.
pub const HOME_ENV: &str = "FOCUSPULSE_HOME";

/// Paths to focuspulse files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focuspulse/`
    pub root: PathBuf,
    /// Config file: `~/.focuspulse/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.focuspulse/focuspulse.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `$FOCUSPULSE_HOME`, falling back to `~/.focuspulse`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, FocusPulseError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            FocusPulseError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".focuspulse")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("focuspulse.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusPulseError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocusPulseError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-focuspulse");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("focuspulse.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("fp"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
