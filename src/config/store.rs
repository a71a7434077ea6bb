//! Persistence of [`SessionConfig`] to a small tab-separated text file.
//!
//! The file holds exactly two lines, with no trailing newline:
//!
//! ```text
//! pomodoro	35
//! break	10
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use super::SessionConfig;
use crate::error::TomatoError;

const WORK_KEY: &str = "pomodoro";
const BREAK_KEY: &str = "break";

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "<key>\t<value>" where the value may be malformed; validated separately
    Regex::new(r"^([A-Za-z_]+)\t(.*)$").unwrap_or_else(|e| panic!("Invalid config line regex: {e}"))
});

/// Load and save access to the persisted settings.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Read the persisted settings, or `None` if nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read.
    fn load(&self) -> Result<Option<SessionConfig>, TomatoError>;

    /// Persist the settings, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&self, config: &SessionConfig) -> Result<(), TomatoError>;
}

/// The `pomodoro.conf` file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use the config file at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for ConfigFile {
    fn load(&self) -> Result<Option<SessionConfig>, TomatoError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                tracing::debug!(path = %self.path.display(), "loaded config file");
                Ok(Some(decode(&contents)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TomatoError::Config(format!(
                "Failed to read config file {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, config: &SessionConfig) -> Result<(), TomatoError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                TomatoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(&self.path, encode(config)).map_err(|e| {
            TomatoError::Config(format!(
                "Failed to write config file {}: {e}",
                self.path.display()
            ))
        })?;
        tracing::info!(
            path = %self.path.display(),
            work_minutes = config.work_minutes,
            break_minutes = config.break_minutes,
            "saved config file"
        );
        Ok(())
    }
}

/// Render the settings in the on-disk layout.
#[must_use]
pub fn encode(config: &SessionConfig) -> String {
    format!(
        "{WORK_KEY}\t{}\n{BREAK_KEY}\t{}",
        config.work_minutes, config.break_minutes
    )
}

/// Parse the on-disk layout.
///
/// Unknown keys are ignored. A missing or malformed value keeps its default.
#[must_use]
pub fn decode(contents: &str) -> SessionConfig {
    let defaults = SessionConfig::default();
    let mut work = None;
    let mut brk = None;

    for line in contents.lines() {
        let line = line.trim_end_matches('\r');
        let Some(caps) = LINE_PATTERN.captures(line) else {
            if !line.trim().is_empty() {
                tracing::warn!(line, "ignoring unrecognised config line");
            }
            continue;
        };

        let slot = match &caps[1] {
            WORK_KEY => &mut work,
            BREAK_KEY => &mut brk,
            other => {
                tracing::warn!(key = other, "ignoring unknown config key");
                continue;
            }
        };

        match super::parse_minutes(&caps[2]) {
            Some(minutes) => *slot = Some(minutes),
            None => tracing::warn!(key = &caps[1], value = &caps[2], "ignoring malformed config value"),
        }
    }

    if work.is_none() || brk.is_none() {
        tracing::warn!("config file incomplete, using defaults for missing values");
    }

    SessionConfig {
        work_minutes: work.unwrap_or(defaults.work_minutes),
        break_minutes: brk.unwrap_or(defaults.break_minutes),
    }
}
