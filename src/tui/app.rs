//! Application state for the timer window.

use crate::audio::Audio;
use crate::config::{is_valid_minutes_input, ConfigStore};
use crate::session::{Command, PhaseColour, Presentation, Session};

/// What the window currently shows. Written by the session, read by the
/// renderer.
#[derive(Debug, Clone)]
pub struct Display {
    /// Remaining time, `MM:SS`.
    pub remaining: String,
    /// Background colour.
    pub colour: PhaseColour,
    /// Window title.
    pub title: String,
    /// Start/stop control label.
    pub run_label: String,
    title_changed: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            remaining: String::new(),
            colour: PhaseColour::Work,
            title: String::new(),
            run_label: String::new(),
            title_changed: false,
        }
    }
}

impl Display {
    /// The title, if it changed since the last call.
    pub fn take_title_change(&mut self) -> Option<&str> {
        if self.title_changed {
            self.title_changed = false;
            Some(&self.title)
        } else {
            None
        }
    }
}

impl Presentation for Display {
    fn set_remaining_label(&mut self, text: &str) {
        text.clone_into(&mut self.remaining);
    }

    fn set_phase_colour(&mut self, colour: PhaseColour) {
        self.colour = colour;
    }

    fn set_window_title(&mut self, text: &str) {
        text.clone_into(&mut self.title);
        self.title_changed = true;
    }

    fn set_run_button_label(&mut self, text: &str) {
        text.clone_into(&mut self.run_label);
    }
}

/// Field of the settings panel that has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    /// Work period length
    #[default]
    Work,
    /// Short break length
    Break,
}

/// The settings panel: two minute fields and a confirm action.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanel {
    /// Whether the panel is shown.
    pub open: bool,
    /// Work minutes as typed.
    pub work: String,
    /// Break minutes as typed.
    pub brk: String,
    /// Focused field.
    pub focus: SettingsField,
}

impl SettingsPanel {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            SettingsField::Work => &mut self.work,
            SettingsField::Break => &mut self.brk,
        }
    }

    /// Type a character into the focused field.
    ///
    /// Returns false, leaving the field unchanged, if the result would not
    /// be empty-or-digits.
    pub fn push(&mut self, c: char) -> bool {
        let field = self.focused_mut();
        let mut candidate = field.clone();
        candidate.push(c);
        if is_valid_minutes_input(&candidate) {
            *field = candidate;
            true
        } else {
            false
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Move focus to the other field.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            SettingsField::Work => SettingsField::Break,
            SettingsField::Break => SettingsField::Work,
        };
    }

    /// Build the apply-settings command. Empty fields are passed as absent.
    #[must_use]
    pub fn command(&self) -> Command {
        let field = |s: &String| (!s.is_empty()).then(|| s.clone());
        Command::ApplySettings {
            work: field(&self.work),
            brk: field(&self.brk),
        }
    }
}

/// Application state.
pub struct App<A, S> {
    /// The timer session, rendering into a [`Display`].
    pub session: Session<Display, A, S>,
    /// Settings panel state.
    pub settings: SettingsPanel,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<A: Audio, S: ConfigStore> App<A, S> {
    /// Create a new app, loading the persisted settings through `store`.
    pub fn new(audio: A, store: S) -> Self {
        let session = Session::start(Display::default(), audio, store);

        Self {
            session,
            settings: SettingsPanel::default(),
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// What the window shows.
    pub const fn display(&self) -> &Display {
        self.session.presentation()
    }

    /// Run a session command, updating the status line for user actions.
    pub fn dispatch(&mut self, command: Command) {
        let status = match &command {
            Command::Tick => None,
            Command::ToggleRun => Some(if self.session.state().running {
                "Stopped"
            } else {
                "Started"
            }),
            Command::Reset => Some("Reset"),
            Command::Skip => Some("Skipped"),
            Command::ApplySettings { .. } => Some("Settings saved"),
        };

        self.session.dispatch(command);

        if let Some(status) = status {
            self.status = Some(status.to_string());
        }
    }

    /// Show or hide the settings panel.
    pub fn toggle_settings(&mut self) {
        self.settings.open = !self.settings.open;
        self.status = None;
    }

    /// Apply what is typed in the settings panel.
    pub fn confirm_settings(&mut self) {
        let command = self.settings.command();
        self.dispatch(command);
        let config = self.session.config();
        self.status = Some(format!(
            "Settings saved: {} min work, {} min break",
            config.work_minutes, config.break_minutes
        ));
    }
}
