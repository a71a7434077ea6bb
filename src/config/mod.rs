//! Configuration management for tomato.
//!
//! This module handles the interval settings and where they are stored.

mod paths;
mod settings;
mod store;

pub use paths::Paths;
pub use settings::{is_valid_minutes_input, parse_minutes, SessionConfig};
#[cfg(test)]
pub use store::MockConfigStore;
pub use store::{decode, encode, ConfigFile, ConfigStore};
