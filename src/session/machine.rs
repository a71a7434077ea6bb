//! The session dispatcher.
//!
//! [`Session`] holds the authoritative [`SessionState`] and config, runs
//! commands through the pure transitions, and hands the resulting effects
//! to its collaborators.

use super::command::Command;
use super::state::SessionState;
use super::transition::{self, Effect, PhaseColour, Transition};
use crate::audio::Audio;
use crate::config::{ConfigStore, SessionConfig};

/// Where display updates go.
#[cfg_attr(test, mockall::automock)]
pub trait Presentation {
    /// Show the remaining time.
    fn set_remaining_label(&mut self, text: &str);
    /// Switch the background colour.
    fn set_phase_colour(&mut self, colour: PhaseColour);
    /// Set the window title.
    fn set_window_title(&mut self, text: &str);
    /// Set the start/stop control's label.
    fn set_run_button_label(&mut self, text: &str);
}

/// A running timer session wired to its collaborators.
pub struct Session<P, A, S> {
    state: SessionState,
    config: SessionConfig,
    presentation: P,
    audio: A,
    store: S,
}

impl<P, A, S> Session<P, A, S>
where
    P: Presentation,
    A: Audio,
    S: ConfigStore,
{
    /// Load the persisted config and start a stopped work period.
    ///
    /// A missing config is a first run: the defaults are written out.
    /// An unreadable config falls back to the defaults without saving.
    pub fn start(presentation: P, audio: A, store: S) -> Self {
        let config = match store.load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = SessionConfig::default();
                tracing::info!("no config file found, writing defaults");
                if let Err(e) = store.save(&config) {
                    tracing::warn!(error = %e, "failed to write default config");
                }
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config, using defaults");
                SessionConfig::default()
            }
        };

        let state = SessionState::new(&config);
        let mut session = Self {
            state,
            config,
            presentation,
            audio,
            store,
        };
        session.render_all();
        session
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The presentation collaborator.
    #[must_use]
    pub const fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Mutable access to the presentation collaborator.
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Run one command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::ToggleRun => {
                self.toggle_run();
            }
            Command::Reset => self.reset(),
            Command::Skip => self.skip(),
            Command::Tick => self.tick(),
            Command::ApplySettings { work, brk } => {
                self.apply_settings(work.as_deref(), brk.as_deref());
            }
        }
    }

    /// Start or stop the countdown. Returns whether it is now running.
    pub fn toggle_run(&mut self) -> bool {
        let t = transition::toggle_run(self.state);
        tracing::info!(running = t.state.running, "toggled timer");
        self.apply(t);
        self.state.running
    }

    /// Restart the current period from its full length.
    pub fn reset(&mut self) {
        let t = transition::reset(self.state, &self.config);
        tracing::info!(phase = %t.state.phase, remaining = %t.state.format_remaining(), "reset timer");
        self.apply(t);
    }

    /// Jump to the other phase.
    pub fn skip(&mut self) {
        let t = transition::skip(self.state, &self.config);
        tracing::info!(period = %t.state.period_label(), "skipped to next phase");
        self.apply(t);
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) {
        let was = self.state.phase;
        let t = transition::tick(self.state, &self.config);
        if t.state.phase != was {
            tracing::info!(period = %t.state.period_label(), "period complete");
        }
        self.apply(t);
    }

    /// Update the settings from free-text input and persist them.
    ///
    /// Invalid fields are ignored. The running countdown is not touched.
    pub fn apply_settings(&mut self, work: Option<&str>, brk: Option<&str>) {
        self.config = self.config.apply(work, brk);
        tracing::info!(
            work_minutes = self.config.work_minutes,
            break_minutes = self.config.break_minutes,
            "applied settings"
        );
        if let Err(e) = self.store.save(&self.config) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        self.state.format_remaining()
    }

    fn apply(&mut self, t: Transition) {
        self.state = t.state;
        for effect in t.effects {
            match effect {
                Effect::RemainingLabel(text) => self.presentation.set_remaining_label(&text),
                Effect::PhaseColour(colour) => self.presentation.set_phase_colour(colour),
                Effect::WindowTitle(title) => self.presentation.set_window_title(title),
                Effect::RunButtonLabel(label) => self.presentation.set_run_button_label(label),
                Effect::Play(cue) => self.audio.play(cue),
            }
        }
    }

    fn render_all(&mut self) {
        let phase = self.state.phase;
        self.presentation
            .set_remaining_label(&self.state.format_remaining());
        self.presentation.set_phase_colour(phase.into());
        self.presentation.set_window_title(phase.window_title());
        self.presentation
            .set_run_button_label(self.state.run_button_label());
    }
}
