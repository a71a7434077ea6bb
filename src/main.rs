use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tomato::audio::{Audio, CommandPlayer, Muted};
use tomato::cli::args::{Cli, Commands};
use tomato::cli::commands;
use tomato::config::{ConfigFile, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = Paths::default();
    if let Some(config) = cli.config {
        paths = paths.with_config_file(config);
    }
    if let Some(sounds) = cli.sounds {
        paths = paths.with_sounds(sounds);
    }
    let store = ConfigFile::new(paths.config_file.clone());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.directive()));

    match cli.command {
        Some(Commands::Config(args)) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();

            let output = commands::config(&store, args.command)
                .with_context(|| format!("config file {}", store.path().display()))?;
            if !output.is_empty() {
                println!("{output}");
            }
        }
        None => {
            paths
                .ensure_dirs()
                .context("Failed to create the config and log directories")?;

            // The window owns stdout, so logs go to a file beside the config
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&paths.log_file)
                .with_context(|| format!("Failed to open log file {}", paths.log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .init();

            let audio: Box<dyn Audio> = if cli.mute {
                Box::new(Muted)
            } else {
                Box::new(CommandPlayer::new(paths.sounds.clone()))
            };

            tomato::tui::run(audio, store)?;
        }
    }

    Ok(())
}
