//! Append-only session transcript.
//!
//! One JSON line per logged turn, timestamped in UTC. Logging is
//! fire-and-forget: a failed append is a warning, never an error surfaced
//! to the turn pipeline.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct TranscriptEntry<'a> {
    timestamp: DateTime<Utc>,
    user_input: Option<&'a str>,
    bot_reply: Option<&'a str>,
}

/// Appending logger for one session's transcript file.
#[derive(Debug, Clone)]
pub struct TranscriptLogger {
    path: PathBuf,
}

impl TranscriptLogger {
    /// Create a logger appending to `path`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append one turn. Either side may be absent (input-only or reply-only
    /// records). Failures are swallowed with a warning.
    pub fn log_turn(&self, user_input: Option<&str>, bot_reply: Option<&str>) {
        let entry = TranscriptEntry {
            timestamp: Utc::now(),
            user_input,
            bot_reply,
        };
        if let Err(e) = self.append(&entry) {
            warn!(path = %self.path.display(), error = %e, "transcript append failed");
        }
    }

    fn append(&self, entry: &TranscriptEntry<'_>) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry).map_err(std::io::Error::other)?;
        writeln!(file, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_logged_turn_appends_one_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.log");
        let logger = TranscriptLogger::new(&path);

        logger.log_turn(Some("hello"), Some("hi there"));
        logger.log_turn(Some("bye"), None);

        let content = std::fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"hello\""));
        assert!(lines[1].contains("\"bot_reply\":null"));
    }

    #[test]
    fn unwritable_path_does_not_panic() {
        let logger = TranscriptLogger::new("/nonexistent-dir/deeper/session.log");
        logger.log_turn(Some("dropped"), None);
    }
}
