//! UI rendering for the timer window.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::audio::Audio;
use crate::config::ConfigStore;
use crate::session::PhaseColour;
use crate::tui::app::{App, SettingsField, SettingsPanel};

const DEFAULT_STATUS: &str = "Space:start/stop | r:reset | n:skip | s:settings | ?:help | q:quit";

/// Background colour for a phase.
fn phase_color(colour: PhaseColour) -> Color {
    let (r, g, b) = colour.rgb();
    Color::Rgb(r, g, b)
}

/// Render the application UI.
pub fn render<A: Audio, S: ConfigStore>(frame: &mut Frame<'_>, app: &App<A, S>) {
    let base = Style::default()
        .fg(Color::Black)
        .bg(phase_color(app.display().colour));
    frame.render_widget(Block::default().style(base), frame.area());

    let settings_height = if app.settings.open { 7 } else { 0 };

    // Create layout: period, time, buttons, settings, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                  // Top padding
            Constraint::Length(1),               // Period label
            Constraint::Length(3),               // Remaining time
            Constraint::Length(1),               // Buttons
            Constraint::Length(settings_height), // Settings panel
            Constraint::Min(0),                  // Bottom padding
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    render_period(frame, app, chunks[1], base);
    render_time(frame, app, chunks[2], base);
    render_buttons(frame, app, chunks[3], base);
    if app.settings.open {
        render_settings(frame, &app.settings, centered(chunks[4], 52), base);
    }
    render_status_bar(frame, app, chunks[6], base);
}

/// Horizontally centre a column of at most `width` cells.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_period<A: Audio, S: ConfigStore>(
    frame: &mut Frame<'_>,
    app: &App<A, S>,
    area: Rect,
    base: Style,
) {
    let label = app.session.state().period_label().to_uppercase();
    let period = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(base.add_modifier(Modifier::BOLD));

    frame.render_widget(period, area);
}

fn render_time<A: Audio, S: ConfigStore>(
    frame: &mut Frame<'_>,
    app: &App<A, S>,
    area: Rect,
    base: Style,
) {
    let time = Paragraph::new(app.display().remaining.as_str())
        .alignment(Alignment::Center)
        .style(base.add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(base),
        );

    frame.render_widget(time, centered(area, 13));
}

fn render_buttons<A: Audio, S: ConfigStore>(
    frame: &mut Frame<'_>,
    app: &App<A, S>,
    area: Rect,
    base: Style,
) {
    let key = base.add_modifier(Modifier::BOLD);
    let settings_key = if app.settings.open {
        key.add_modifier(Modifier::REVERSED)
    } else {
        key
    };

    let line = Line::from(vec![
        Span::styled("[Space] ", key),
        Span::styled(format!("{}  ", app.display().run_label), base),
        Span::styled("[r] ", key),
        Span::styled("Reset  ", base),
        Span::styled("[n] ", key),
        Span::styled("Skip  ", base),
        Span::styled("[s] ", settings_key),
        Span::styled("Settings", base),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_settings(frame: &mut Frame<'_>, panel: &SettingsPanel, area: Rect, base: Style) {
    let field = |label: &'static str, value: &str, focused: bool| {
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        };
        Line::from(vec![
            Span::styled(marker, base),
            Span::styled(label, base),
            Span::styled(format!("{value:_<4}"), value_style),
        ])
    };

    let lines = vec![
        field(
            "Pomodoro time:    ",
            &panel.work,
            panel.focus == SettingsField::Work,
        ),
        Line::from(Span::styled("  Short break time", base)),
        field(
            "(long is double): ",
            &panel.brk,
            panel.focus == SettingsField::Break,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "  [Enter] Confirm",
            base.add_modifier(Modifier::BOLD),
        )),
    ];

    let settings = Paragraph::new(lines).style(base).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(base),
    );

    frame.render_widget(settings, area);
}

/// Render the status bar.
fn render_status_bar<A: Audio, S: ConfigStore>(
    frame: &mut Frame<'_>,
    app: &App<A, S>,
    area: Rect,
    base: Style,
) {
    let status_text = app.status.as_deref().unwrap_or(DEFAULT_STATUS);
    let status = Paragraph::new(status_text).style(base.add_modifier(Modifier::DIM));

    frame.render_widget(status, area);
}
