//! Path resolution for tomato's config and data files.
//!
//! Everything lives in `~/.tomato/`:
//! - `pomodoro.conf` - interval lengths
//! - `sounds/` - `start.mp3` and `done.mp3` cue files
//! - `tomato.log` - log output while the timer window is open (beside the
//!   config file when `--config` moves it)

use std::path::PathBuf;

use crate::error::TomatoError;

/// Paths to tomato's config and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomato/`
    pub root: PathBuf,
    /// Config file: `~/.tomato/pomodoro.conf`
    pub config_file: PathBuf,
    /// Sound cue directory: `~/.tomato/sounds/`
    pub sounds: PathBuf,
    /// Log file: `~/.tomato/tomato.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomatoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TomatoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tomato")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("pomodoro.conf"),
            sounds: root.join("sounds"),
            log_file: root.join("tomato.log"),
            root,
        }
    }

    /// Replace the config file location, e.g. from `--config`.
    ///
    /// The log file moves next to it.
    #[must_use]
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.log_file = path.with_file_name("tomato.log");
        self.config_file = path;
        self
    }

    /// Replace the sounds directory, e.g. from `--sounds`.
    #[must_use]
    pub fn with_sounds(mut self, dir: PathBuf) -> Self {
        self.sounds = dir;
        self
    }

    /// Ensure the directories holding the config and log files exist.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomatoError> {
        let dirs = [&self.config_file, &self.log_file]
            .into_iter()
            .filter_map(|file| file.parent());

        for dir in dirs {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(&dir).map_err(|e| {
                    TomatoError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tomato"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-tomato");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("pomodoro.conf"));
        assert_eq!(paths.sounds, root.join("sounds"));
        assert_eq!(paths.log_file, root.join("tomato.log"));
    }

    #[test]
    fn test_overrides() {
        let paths = Paths::with_root(PathBuf::from("/tmp/t"))
            .with_config_file(PathBuf::from("/etc/pomodoro.conf"))
            .with_sounds(PathBuf::from("/usr/share/tomato"));

        assert_eq!(paths.config_file, PathBuf::from("/etc/pomodoro.conf"));
        assert_eq!(paths.sounds, PathBuf::from("/usr/share/tomato"));
        assert_eq!(paths.log_file, PathBuf::from("/etc/tomato.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("root"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }

    #[test]
    fn test_ensure_dirs_with_config_elsewhere_skips_root() {
        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere");
        let paths = Paths::with_root(temp_dir.path().join("root"))
            .with_config_file(elsewhere.join("pomodoro.conf"));

        paths.ensure_dirs().unwrap();

        assert!(elsewhere.exists());
        assert_eq!(paths.log_file, elsewhere.join("tomato.log"));
        assert!(!paths.root.exists());
    }

    #[test]
    fn test_bare_config_file_name() {
        let paths = Paths::with_root(PathBuf::from("/tmp/t"))
            .with_config_file(PathBuf::from("pomodoro.conf"));

        assert_eq!(paths.log_file, PathBuf::from("tomato.log"));
    }
}
