//! The timer window.
//!
//! A full-screen terminal interface built with ratatui and crossterm.
//! The event loop owns the [`Ticker`] and feeds one tick per second into
//! the session, interleaved with key presses.

mod app;
mod event;
mod ticker;
mod ui;

pub use app::{App, Display, SettingsField, SettingsPanel};
pub use event::Action;
pub use ticker::{Ticker, TICK_INTERVAL};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::*;

use crate::audio::Audio;
use crate::config::ConfigStore;
use crate::error::TomatoError;
use crate::session::Command;

/// Run the timer window until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or run.
pub fn run<A: Audio, S: ConfigStore>(audio: A, store: S) -> Result<(), TomatoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TomatoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomatoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomatoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(audio, store);
    tracing::info!("timer window opened");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    tracing::info!("timer window closed");

    result
}

/// Run the main application loop.
fn run_app<A: Audio, S: ConfigStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<A, S>,
) -> Result<(), TomatoError> {
    let mut ticker = Ticker::new(TICK_INTERVAL, Instant::now());

    while !app.should_quit {
        if let Some(title) = app.session.presentation_mut().take_title_change() {
            execute!(terminal.backend_mut(), SetTitle(title))
                .map_err(|e| TomatoError::Terminal(format!("Failed to set title: {e}")))?;
        }

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomatoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events until the next tick is due
        if let Some(action) = event::handle_events(app, ticker.timeout(Instant::now()))? {
            match action {
                Action::Quit => app.should_quit = true,
                Action::Session(command) => app.dispatch(command),
                Action::ToggleSettings => app.toggle_settings(),
                Action::ConfirmSettings => app.confirm_settings(),
            }
        }

        for _ in 0..ticker.due(Instant::now()) {
            app.dispatch(Command::Tick);
        }
    }

    Ok(())
}
