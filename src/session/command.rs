//! Commands accepted by the session.

/// Everything that can drive the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start or stop the countdown.
    ToggleRun,
    /// Restart the current period.
    Reset,
    /// Jump to the other phase.
    Skip,
    /// One second has passed.
    Tick,
    /// Apply free-text settings input. `None` leaves a field alone.
    ApplySettings {
        /// Work period length in minutes
        work: Option<String>,
        /// Short break length in minutes
        brk: Option<String>,
    },
}
