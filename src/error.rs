//! Error types for tomato.

use thiserror::Error;

/// Errors that can occur outside the session state machine.
///
/// The state machine itself never fails; these cover the collaborators
/// around it (config file, terminal, argument handling).
#[derive(Debug, Error)]
pub enum TomatoError {
    /// Configuration or path resolution failed.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for TomatoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
