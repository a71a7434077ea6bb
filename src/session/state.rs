//! Live timer state.

use chrono::Duration;

use crate::config::SessionConfig;

/// Whether the session is in a work or a break period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Focused work period
    Work,
    /// Rest period following a work period
    Break,
}

impl Phase {
    /// The other phase.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Window title shown during this phase.
    #[must_use]
    pub const fn window_title(self) -> &'static str {
        match self {
            Self::Work => "[POMODORO] Timer",
            Self::Break => "[BREAK] Timer",
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Pomodoro",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Length class of a break. Long breaks last twice as long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// Break of `break_minutes`
    Short,
    /// Break of twice `break_minutes`
    Long,
}

impl BreakKind {
    /// The other kind.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Short => Self::Long,
            Self::Long => Self::Short,
        }
    }
}

impl std::fmt::Display for BreakKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "Short"),
            Self::Long => write!(f, "Long"),
        }
    }
}

/// The timer's state at one instant.
///
/// Plain value: transitions in [`super::transition`] take one and return
/// the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Current phase.
    pub phase: Phase,
    /// Kind of the current break. Only meaningful during [`Phase::Break`].
    pub break_kind: BreakKind,
    /// Kind the next break reset will produce.
    pub next_break: BreakKind,
    /// Whether the countdown is decrementing.
    pub running: bool,
    /// Time left in the current period. Never negative, whole seconds.
    pub remaining: Duration,
}

impl SessionState {
    /// Initial state: a stopped, full-length work period.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            phase: Phase::Work,
            break_kind: BreakKind::Short,
            next_break: BreakKind::Short,
            running: false,
            remaining: config.work_duration(),
        }
    }

    /// Render `remaining` as zero-padded `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining)
    }

    /// Label for the start/stop control in this state.
    #[must_use]
    pub const fn run_button_label(&self) -> &'static str {
        if self.running {
            "Stop"
        } else {
            "Start"
        }
    }

    /// Human label for the current period, e.g. "Long Break".
    #[must_use]
    pub fn period_label(&self) -> String {
        match self.phase {
            Phase::Work => Phase::Work.to_string(),
            Phase::Break => format!("{} Break", self.break_kind),
        }
    }
}

/// Format a duration as `MM:SS`.
///
/// Minutes are not wrapped into hours: 65 minutes renders as `65:00`.
#[must_use]
pub fn format_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::new(&SessionConfig::default());

        assert_eq!(state.phase, Phase::Work);
        assert!(!state.running);
        assert_eq!(state.remaining, Duration::minutes(35));
        assert_eq!(state.format_remaining(), "35:00");
        assert_eq!(state.run_button_label(), "Start");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(Duration::seconds(125)), "02:05");
        assert_eq!(format_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_mmss(Duration::seconds(59)), "00:59");
        assert_eq!(format_mmss(Duration::minutes(65)), "65:00");
        assert_eq!(format_mmss(Duration::minutes(200)), "200:00");
    }

    #[test]
    fn test_flips() {
        assert_eq!(Phase::Work.flipped(), Phase::Break);
        assert_eq!(Phase::Break.flipped(), Phase::Work);
        assert_eq!(BreakKind::Short.flipped(), BreakKind::Long);
        assert_eq!(BreakKind::Long.flipped(), BreakKind::Short);
    }

    #[test]
    fn test_period_label() {
        let mut state = SessionState::new(&SessionConfig::default());
        assert_eq!(state.period_label(), "Pomodoro");

        state.phase = Phase::Break;
        state.break_kind = BreakKind::Long;
        assert_eq!(state.period_label(), "Long Break");
    }
}
