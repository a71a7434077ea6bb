//! Sound cues.
//!
//! Cues are fire-and-forget: each one is played on its own thread, which
//! waits for the player process and falls back to the next player, then to
//! the terminal bell, when a player fails.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// A named sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Played when the timer is started or stopped
    TickStart,
    /// Played when a work or break period runs out
    PeriodComplete,
}

impl Cue {
    /// Stable identifier, e.g. `tick-start`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::TickStart => "tick-start",
            Self::PeriodComplete => "period-complete",
        }
    }

    /// File name of the cue inside the sounds directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::TickStart => "start.mp3",
            Self::PeriodComplete => "done.mp3",
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Something that can play cues.
#[cfg_attr(test, mockall::automock)]
pub trait Audio {
    /// Start playing `cue` without waiting for it to finish.
    fn play(&self, cue: Cue);
}

impl<T: Audio + ?Sized> Audio for Box<T> {
    fn play(&self, cue: Cue) {
        (**self).play(cue);
    }
}

/// Audio that stays silent (`--mute`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl Audio for Muted {
    fn play(&self, cue: Cue) {
        tracing::debug!(cue = cue.id(), "muted, not playing cue");
    }
}

/// An external program that plays a sound file given as its last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    program: String,
    args: Vec<String>,
}

impl Player {
    /// Run `program`, with `args` placed before the file.
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Play `file` to completion. True only if the player exited cleanly.
    fn play_to_end(&self, file: &Path) -> bool {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match child.and_then(|mut child| child.wait()) {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::debug!(player = %self.program, %status, "player failed");
                false
            }
            Err(e) => {
                tracing::debug!(player = %self.program, error = %e, "player unavailable");
                false
            }
        }
    }
}

/// Players able to decode mp3, tried in order. `paplay` only handles
/// formats libsndfile knows, so it comes last.
fn default_players() -> Vec<Player> {
    vec![
        Player::new("mpg123", &["-q"]),
        Player::new("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
        Player::new("afplay", &[]),
        Player::new("paplay", &[]),
    ]
}

/// How a cue ended up being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Played {
    /// The named player finished successfully.
    Player(String),
    /// No player worked; the terminal bell rang instead.
    Bell,
}

/// Plays cue files from a directory through the first system player that
/// succeeds.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    sounds: PathBuf,
    players: Arc<[Player]>,
}

impl CommandPlayer {
    /// Play cue files found in `sounds` with the usual system players.
    #[must_use]
    pub fn new(sounds: PathBuf) -> Self {
        Self::with_players(sounds, default_players())
    }

    /// Play cue files found in `sounds` with `players`, tried in order.
    #[must_use]
    pub fn with_players(sounds: PathBuf, players: Vec<Player>) -> Self {
        Self {
            sounds,
            players: players.into(),
        }
    }

    /// Path of the file for `cue`.
    #[must_use]
    pub fn cue_path(&self, cue: Cue) -> PathBuf {
        self.sounds.join(cue.file_name())
    }

    /// Play `cue` on a background thread. The thread owns and reaps every
    /// process it starts.
    pub fn spawn_cue(&self, cue: Cue) -> JoinHandle<Played> {
        let file = self.cue_path(cue);
        let players = Arc::clone(&self.players);
        thread::spawn(move || play_file(cue, &file, &players))
    }
}

fn play_file(cue: Cue, file: &Path, players: &[Player]) -> Played {
    if file.exists() {
        if let Some(player) = players.iter().find(|p| p.play_to_end(file)) {
            tracing::debug!(cue = cue.id(), player = %player.program, "played cue");
            return Played::Player(player.program.clone());
        }
    }

    tracing::debug!(cue = cue.id(), file = %file.display(), "no player for cue, ringing bell");
    bell();
    Played::Bell
}

fn bell() {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07").ok();
    stdout.flush().ok();
}

impl Audio for CommandPlayer {
    fn play(&self, cue: Cue) {
        // Detached; the thread finishes on its own
        drop(self.spawn_cue(cue));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use tempfile::TempDir;

    use super::*;

    // Tests below start child processes and inspect this process's children
    static SPAWN_LOCK: Mutex<()> = Mutex::new(());

    /// A `sh` one-liner standing in for a player.
    fn stub(script: &str) -> Player {
        Player::new("sh", &["-c", script, "stub"])
    }

    fn sounds_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("start.mp3"), b"").unwrap();
        std::fs::write(dir.path().join("done.mp3"), b"").unwrap();
        dir
    }

    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "pid (comm) state ppid ..."; comm may contain spaces
                let rest = stat.rsplit_once(')').map_or("", |(_, rest)| rest);
                let mut fields = rest.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(me.as_str())
            })
            .count()
    }

    #[test]
    fn test_cue_ids() {
        assert_eq!(Cue::TickStart.id(), "tick-start");
        assert_eq!(Cue::PeriodComplete.id(), "period-complete");
        assert_eq!(Cue::PeriodComplete.to_string(), "period-complete");
    }

    #[test]
    fn test_cue_path() {
        let player = CommandPlayer::new(PathBuf::from("/opt/sounds"));

        assert_eq!(
            player.cue_path(Cue::TickStart),
            PathBuf::from("/opt/sounds/start.mp3")
        );
        assert_eq!(
            player.cue_path(Cue::PeriodComplete),
            PathBuf::from("/opt/sounds/done.mp3")
        );
    }

    #[test]
    fn test_mp3_players_come_before_paplay() {
        let names: Vec<_> = default_players().into_iter().map(|p| p.program).collect();

        assert_eq!(names, vec!["mpg123", "ffplay", "afplay", "paplay"]);
    }

    #[test]
    fn test_failed_player_falls_through_to_next() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = sounds_dir();
        let player = CommandPlayer::with_players(
            dir.path().to_path_buf(),
            vec![
                Player::new("tomato-no-such-player", &[]),
                stub("exit 1"),
                Player::new("true", &[]),
            ],
        );

        let played = player.spawn_cue(Cue::TickStart).join().unwrap();

        assert_eq!(played, Played::Player("true".to_string()));
    }

    #[test]
    fn test_all_players_failing_rings_bell() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = sounds_dir();
        let player =
            CommandPlayer::with_players(dir.path().to_path_buf(), vec![stub("exit 1"), stub("exit 2")]);

        assert_eq!(player.spawn_cue(Cue::PeriodComplete).join().unwrap(), Played::Bell);
    }

    #[test]
    fn test_missing_file_rings_bell() {
        let dir = TempDir::new().unwrap();
        let player = CommandPlayer::with_players(dir.path().to_path_buf(), vec![stub("exit 0")]);

        assert_eq!(player.spawn_cue(Cue::TickStart).join().unwrap(), Played::Bell);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_cues_leave_no_zombies() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = sounds_dir();
        let player = CommandPlayer::with_players(dir.path().to_path_buf(), vec![stub("exit 1")]);

        let handles: Vec<_> = (0..20).map(|_| player.spawn_cue(Cue::TickStart)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Played::Bell);
        }

        assert_eq!(zombie_children(), 0);
    }
}
