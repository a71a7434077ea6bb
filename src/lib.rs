//! tomato - A Pomodoro timer for the terminal
//!
//! This crate provides the work/break session state machine and the
//! terminal window, sound cues and settings file around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use config::SessionConfig;
pub use error::TomatoError;
pub use session::{Command, Session, SessionState};
