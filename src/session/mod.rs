//! The Pomodoro session state machine.
//!
//! Alternates work periods with breaks that switch between short and long:
//! - [`state`]: the plain state value
//! - [`transition`]: pure operations on it
//! - [`machine`]: the dispatcher that owns the state and talks to the
//!   presentation, audio and config collaborators

pub mod command;
pub mod machine;
pub mod state;
pub mod transition;

pub use command::Command;
#[cfg(test)]
pub use machine::MockPresentation;
pub use machine::{Presentation, Session};
pub use state::{format_mmss, BreakKind, Phase, SessionState};
pub use transition::{Effect, PhaseColour, Transition};
