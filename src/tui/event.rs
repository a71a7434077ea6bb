//! Event handling for the timer window.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::audio::Audio;
use crate::config::ConfigStore;
use crate::error::TomatoError;
use crate::session::Command;
use crate::tui::app::App;

const HELP: &str = "Space:start/stop | r:reset | n:skip | s:settings | q:quit";
const SETTINGS_HELP: &str = "digits:edit | Tab:next field | Enter:confirm | Esc:close";

/// Action to take after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Send a command to the session.
    Session(Command),
    /// Show or hide the settings panel.
    ToggleSettings,
    /// Apply the settings panel input.
    ConfirmSettings,
}

/// Wait up to `timeout` for a terminal event and translate it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<A: Audio, S: ConfigStore>(
    app: &mut App<A, S>,
    timeout: Duration,
) -> Result<Option<Action>, TomatoError> {
    if !event::poll(timeout).map_err(|e| TomatoError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| TomatoError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(handle_key(app, key)),
        _ => Ok(None),
    }
}

/// Translate one key press.
pub fn handle_key<A: Audio, S: ConfigStore>(app: &mut App<A, S>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.settings.open {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                app.settings.push(c);
                return None;
            }
            KeyCode::Backspace => {
                app.settings.backspace();
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                app.settings.next_field();
                return None;
            }
            KeyCode::Enter => return Some(Action::ConfirmSettings),
            KeyCode::Esc => return Some(Action::ToggleSettings),
            KeyCode::Char('?') => {
                app.status = Some(SETTINGS_HELP.to_string());
                return None;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Session(Command::ToggleRun)),
        KeyCode::Char('r') => Some(Action::Session(Command::Reset)),
        KeyCode::Char('n') => Some(Action::Session(Command::Skip)),
        KeyCode::Char('s') => Some(Action::ToggleSettings),
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    }
}
