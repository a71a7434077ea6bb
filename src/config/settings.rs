//! Interval settings for the timer.
//!
//! Settings are persisted to `~/.tomato/pomodoro.conf` by [`ConfigFile`](super::ConfigFile).

use chrono::Duration;
use serde::Serialize;

use crate::session::BreakKind;

/// User-adjustable interval lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    /// Length of a work period in minutes.
    pub work_minutes: u32,
    /// Length of a short break in minutes. A long break is twice this.
    pub break_minutes: u32,
}

// Default values
const fn default_work_minutes() -> u32 {
    35
}

const fn default_break_minutes() -> u32 {
    10
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl SessionConfig {
    /// Create a config from explicit minute values.
    #[must_use]
    pub const fn new(work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            work_minutes,
            break_minutes,
        }
    }

    /// Full length of a work period.
    #[must_use]
    pub fn work_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.work_minutes))
    }

    /// Full length of a break of the given kind.
    #[must_use]
    pub fn break_duration(&self, kind: BreakKind) -> Duration {
        let minutes = i64::from(self.break_minutes);
        match kind {
            BreakKind::Short => Duration::minutes(minutes),
            BreakKind::Long => Duration::minutes(2 * minutes),
        }
    }

    /// Apply free-text settings input.
    ///
    /// Each field is overwritten only if its input parses with
    /// [`parse_minutes`]; anything else leaves the current value in place.
    #[must_use]
    pub fn apply(self, work_input: Option<&str>, break_input: Option<&str>) -> Self {
        Self {
            work_minutes: work_input.and_then(parse_minutes).unwrap_or(self.work_minutes),
            break_minutes: break_input
                .and_then(parse_minutes)
                .unwrap_or(self.break_minutes),
        }
    }
}

/// Parse a settings field as a whole number of minutes.
///
/// Accepts only a non-empty run of ASCII digits that fits in a `u32`.
/// Signs, whitespace and decimal points are rejected.
#[must_use]
pub fn parse_minutes(input: &str) -> Option<u32> {
    if is_valid_minutes_input(input) && !input.is_empty() {
        input.parse().ok()
    } else {
        None
    }
}

/// Keystroke-level filter for a settings field: empty or all digits.
#[must_use]
pub fn is_valid_minutes_input(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();

        assert_eq!(config.work_minutes, 35);
        assert_eq!(config.break_minutes, 10);
    }

    #[test]
    fn test_durations() {
        let config = SessionConfig::new(25, 5);

        assert_eq!(config.work_duration().num_seconds(), 1500);
        assert_eq!(config.break_duration(BreakKind::Short).num_minutes(), 5);
        assert_eq!(config.break_duration(BreakKind::Long).num_minutes(), 10);
    }

    #[test]
    fn test_apply_ignores_invalid_field() {
        let config = SessionConfig::default().apply(Some("25"), Some("abc"));

        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.break_minutes, 10);
    }

    #[test]
    fn test_apply_absent_fields() {
        let config = SessionConfig::new(40, 8).apply(None, Some("12"));

        assert_eq!(config, SessionConfig::new(40, 12));
        assert_eq!(config.apply(None, None), config);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("25"), Some(25));
        assert_eq!(parse_minutes("0"), Some(0));
        assert_eq!(parse_minutes("007"), Some(7));
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("+5"), None);
        assert_eq!(parse_minutes(" 5"), None);
        assert_eq!(parse_minutes("2.5"), None);
        assert_eq!(parse_minutes("99999999999"), None);
    }

    #[test]
    fn test_keystroke_filter() {
        assert!(is_valid_minutes_input(""));
        assert!(is_valid_minutes_input("123"));
        assert!(!is_valid_minutes_input("12a"));
        assert!(!is_valid_minutes_input("١٢"));
    }
}
