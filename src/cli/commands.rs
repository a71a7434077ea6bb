//! Headless commands.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{ConfigFile, ConfigStore, SessionConfig};
use crate::error::TomatoError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn config(store: &ConfigFile, cmd: ConfigCommands) -> Result<String, TomatoError> {
    match cmd {
        ConfigCommands::Show { output } => {
            let config = store.load()?.unwrap_or_default();
            format_config(&config, output)
        }
        ConfigCommands::Set { work, brk, output } => {
            let current = store.load()?.unwrap_or_default();
            let updated = current.apply(work.as_deref(), brk.as_deref());
            store.save(&updated)?;
            format_config(&updated, output)
        }
        ConfigCommands::Path => Ok(store.path().display().to_string()),
    }
}

fn format_config(config: &SessionConfig, format: OutputFormat) -> Result<String, TomatoError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Pretty => Ok(format!(
            "{} {} min\n{} {} min\n{} {} min",
            "Pomodoro:   ".bold(),
            config.work_minutes,
            "Short break:".bold(),
            config.break_minutes,
            "Long break: ".bold(),
            u64::from(config.break_minutes) * 2,
        )),
    }
}
