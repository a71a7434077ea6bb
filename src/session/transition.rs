//! Pure transition functions of the session state machine.
//!
//! Each operation takes the current [`SessionState`] and the active
//! [`SessionConfig`] and returns the next state together with the display
//! updates and sound cues it produced. Nothing here performs I/O.

use chrono::Duration;

use super::state::{Phase, SessionState};
use crate::audio::Cue;
use crate::config::SessionConfig;

/// Background colour associated with a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseColour {
    /// Red, `#f05b56`
    Work,
    /// Green, `#57f15c`
    Break,
}

impl PhaseColour {
    /// RGB components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Work => (0xf0, 0x5b, 0x56),
            Self::Break => (0x57, 0xf1, 0x5c),
        }
    }

    /// Hex notation, e.g. `#f05b56`.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<Phase> for PhaseColour {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Work => Self::Work,
            Phase::Break => Self::Break,
        }
    }
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show this text as the remaining time.
    RemainingLabel(String),
    /// Switch the background to this colour.
    PhaseColour(PhaseColour),
    /// Set the window title.
    WindowTitle(&'static str),
    /// Set the start/stop control's label.
    RunButtonLabel(&'static str),
    /// Play a sound cue.
    Play(Cue),
}

/// Result of one operation: the next state and what it asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the operation.
    pub state: SessionState,
    /// Effects in the order they were produced.
    pub effects: Vec<Effect>,
}

impl Transition {
    const fn unchanged(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Flip between running and stopped.
///
/// The start cue plays in both directions.
#[must_use]
pub fn toggle_run(state: SessionState) -> Transition {
    let state = SessionState {
        running: !state.running,
        ..state
    };

    Transition {
        effects: vec![
            Effect::Play(Cue::TickStart),
            Effect::RunButtonLabel(state.run_button_label()),
        ],
        state,
    }
}

/// Restart the current period from its full length, stopped.
///
/// During a break this consumes the pending break kind and queues the
/// opposite kind for the next break.
#[must_use]
pub fn reset(state: SessionState, config: &SessionConfig) -> Transition {
    let mut next = SessionState {
        running: false,
        ..state
    };

    match next.phase {
        Phase::Work => next.remaining = config.work_duration(),
        Phase::Break => {
            next.break_kind = next.next_break;
            next.next_break = next.next_break.flipped();
            next.remaining = config.break_duration(next.break_kind);
        }
    }

    Transition {
        effects: vec![
            Effect::RemainingLabel(next.format_remaining()),
            Effect::RunButtonLabel(next.run_button_label()),
        ],
        state: next,
    }
}

/// Move to the other phase and reset it.
#[must_use]
pub fn skip(state: SessionState, config: &SessionConfig) -> Transition {
    let phase = state.phase.flipped();
    let flipped = SessionState {
        running: false,
        phase,
        ..state
    };

    let mut effects = vec![
        Effect::PhaseColour(phase.into()),
        Effect::WindowTitle(phase.window_title()),
    ];
    let reset = reset(flipped, config);
    effects.extend(reset.effects);

    Transition {
        state: reset.state,
        effects,
    }
}

/// Advance the countdown by one second.
///
/// Does nothing while stopped. When the countdown reaches zero the
/// period-complete cue plays and the session skips to the next phase.
#[must_use]
pub fn tick(state: SessionState, config: &SessionConfig) -> Transition {
    if !state.running {
        return Transition::unchanged(state);
    }

    let remaining = (state.remaining - Duration::seconds(1)).max(Duration::zero());
    let state = SessionState { remaining, ..state };
    let mut effects = vec![Effect::RemainingLabel(state.format_remaining())];

    if remaining > Duration::zero() {
        return Transition { state, effects };
    }

    effects.push(Effect::Play(Cue::PeriodComplete));
    let skipped = skip(state, config);
    effects.extend(skipped.effects);

    Transition {
        state: skipped.state,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BreakKind;

    fn config() -> SessionConfig {
        SessionConfig::new(35, 10)
    }

    fn running(state: SessionState) -> SessionState {
        SessionState {
            running: true,
            ..state
        }
    }

    #[test]
    fn test_ticks_count_down_exactly() {
        let config = config();
        let start = running(SessionState::new(&config));
        let mut state = start;

        for _ in 0..100 {
            state = tick(state, &config).state;
        }

        assert_eq!(state.remaining, start.remaining - Duration::seconds(100));
        assert_eq!(state.phase, start.phase);
        assert_eq!(state.break_kind, start.break_kind);
        assert!(state.running);
    }

    #[test]
    fn test_tick_while_stopped_is_noop() {
        let config = config();
        let state = SessionState {
            remaining: Duration::seconds(42),
            ..SessionState::new(&config)
        };

        let t = tick(state, &config);

        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_tick_to_zero_skips_to_short_break() {
        let config = config();
        let state = SessionState {
            remaining: Duration::seconds(1),
            ..running(SessionState::new(&config))
        };

        let t = tick(state, &config);

        assert_eq!(t.state.phase, Phase::Break);
        assert_eq!(t.state.break_kind, BreakKind::Short);
        assert!(!t.state.running);
        assert_eq!(t.state.remaining, Duration::minutes(10));
        assert_eq!(
            t.effects,
            vec![
                Effect::RemainingLabel("00:00".to_string()),
                Effect::Play(Cue::PeriodComplete),
                Effect::PhaseColour(PhaseColour::Break),
                Effect::WindowTitle("[BREAK] Timer"),
                Effect::RemainingLabel("10:00".to_string()),
                Effect::RunButtonLabel("Start"),
            ]
        );
    }

    #[test]
    fn test_tick_from_zero_does_not_go_negative() {
        let config = SessionConfig::new(0, 1);
        let state = running(SessionState::new(&config));
        assert_eq!(state.remaining, Duration::zero());

        let t = tick(state, &config);

        assert_eq!(t.state.phase, Phase::Break);
        assert_eq!(t.state.remaining, Duration::minutes(1));
        assert!(t.effects.contains(&Effect::RemainingLabel("00:00".to_string())));
    }

    #[test]
    fn test_breaks_alternate() {
        let config = config();
        let mut state = SessionState::new(&config);
        let mut kinds = Vec::new();

        for _ in 0..4 {
            state = skip(state, &config).state; // into break
            assert_eq!(state.phase, Phase::Break);
            assert_eq!(state.remaining, config.break_duration(state.break_kind));
            kinds.push(state.break_kind);
            state = skip(state, &config).state; // back to work
            assert_eq!(state.phase, Phase::Work);
            assert_eq!(state.remaining, Duration::minutes(35));
        }

        assert_eq!(
            kinds,
            vec![
                BreakKind::Short,
                BreakKind::Long,
                BreakKind::Short,
                BreakKind::Long
            ]
        );
    }

    #[test]
    fn test_long_break_is_double() {
        let config = config();
        let short_break = skip(SessionState::new(&config), &config).state;
        assert_eq!(short_break.break_kind, BreakKind::Short);

        let long_break = skip(skip(short_break, &config).state, &config).state;

        assert_eq!(long_break.break_kind, BreakKind::Long);
        assert_eq!(long_break.remaining, Duration::minutes(20));
    }

    #[test]
    fn test_reset_mid_work() {
        let config = config();
        let state = SessionState {
            remaining: Duration::seconds(600),
            ..running(SessionState::new(&config))
        };

        let t = reset(state, &config);

        assert_eq!(t.state.remaining, Duration::seconds(2100));
        assert!(!t.state.running);
        assert_eq!(
            t.effects,
            vec![
                Effect::RemainingLabel("35:00".to_string()),
                Effect::RunButtonLabel("Start"),
            ]
        );
    }

    #[test]
    fn test_reset_during_break_advances_break_kind() {
        let config = config();
        let short_break = skip(SessionState::new(&config), &config).state;

        let again = reset(short_break, &config).state;

        assert_eq!(again.phase, Phase::Break);
        assert_eq!(again.break_kind, BreakKind::Long);
        assert_eq!(again.remaining, Duration::minutes(20));
    }

    #[test]
    fn test_reset_uses_new_config_but_settings_alone_do_not() {
        let config = config();
        let state = SessionState {
            remaining: Duration::seconds(600),
            ..SessionState::new(&config)
        };
        let updated = config.apply(Some("25"), None);

        // The state is only recomputed on reset
        assert_eq!(state.remaining, Duration::seconds(600));
        assert_eq!(reset(state, &updated).state.remaining, Duration::minutes(25));
    }

    #[test]
    fn test_toggle_run_plays_start_cue_both_ways() {
        let state = SessionState::new(&config());

        let started = toggle_run(state);
        assert!(started.state.running);
        assert_eq!(
            started.effects,
            vec![Effect::Play(Cue::TickStart), Effect::RunButtonLabel("Stop")]
        );

        let stopped = toggle_run(started.state);
        assert!(!stopped.state.running);
        assert_eq!(
            stopped.effects,
            vec![Effect::Play(Cue::TickStart), Effect::RunButtonLabel("Start")]
        );
    }

    #[test]
    fn test_skip_stops_and_sets_presentation() {
        let config = config();
        let state = running(SessionState::new(&config));

        let to_break = skip(state, &config);
        assert!(!to_break.state.running);
        assert_eq!(to_break.effects[0], Effect::PhaseColour(PhaseColour::Break));

        let to_work = skip(to_break.state, &config);
        assert_eq!(to_work.state.phase, Phase::Work);
        assert_eq!(to_work.effects[1], Effect::WindowTitle("[POMODORO] Timer"));
    }

    #[test]
    fn test_phase_colour_hex() {
        assert_eq!(PhaseColour::Work.hex(), "#f05b56");
        assert_eq!(PhaseColour::Break.hex(), "#57f15c");
    }
}
