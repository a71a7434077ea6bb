use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A Pomodoro work/break timer for the terminal")]
#[command(long_about = "tomato - A Pomodoro timer

Alternates work periods with breaks. Every other break is a long break,
twice the length of a short one. Interval lengths are kept in
~/.tomato/pomodoro.conf.

QUICK START:
  tomato                        Open the timer window
  tomato config show            Print the saved interval lengths
  tomato config set --work 25   Change the work period length

IN THE WINDOW:
  Space  start/stop    r  reset    n  skip    s  settings    q  quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Config file to read and write
    ///
    /// Defaults to ~/.tomato/pomodoro.conf.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding start.mp3 and done.mp3
    ///
    /// Defaults to ~/.tomato/sounds.
    #[arg(long, global = true, value_name = "DIR")]
    pub sounds: Option<PathBuf>,

    /// Do not play sound cues
    #[arg(short, long, global = true)]
    pub mute: bool,

    /// Minimum level of log messages
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Log verbosity.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Diagnostic detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Error => "tomato=error",
            Self::Warn => "tomato=warn",
            Self::Info => "tomato=info",
            Self::Debug => "tomato=debug",
            Self::Trace => "tomato=trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the saved interval lengths
    ///
    /// # Examples
    ///
    ///   tomato config show
    ///   tomato config show --output json
    ///   tomato config set --work 25 --break 5
    ///   tomato config path
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the saved settings
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Change the saved settings
    ///
    /// Each value must be a whole number of minutes. A value that is not
    /// digits-only is ignored and the old setting kept.
    Set {
        /// Work period length in minutes
        #[arg(short, long, value_name = "MINUTES")]
        work: Option<String>,

        /// Short break length in minutes (long breaks are double)
        #[arg(short = 'b', long = "break", value_name = "MINUTES")]
        brk: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Print the config file location
    Path,
}
