//! State persistence — full-file JSON snapshots.
//!
//! Each structure lives in its own file and every save is a point-in-time
//! overwrite; there is no transaction across files. The write ordering is
//! fixed (word pairs → short-term → long-term → profile, with the emotional
//! state inside the profile written last) so a crash mid-turn leaves a
//! well-defined prefix of the turn's updates on disk.
//!
//! Loading never fails: missing or corrupt files degrade to empty defaults
//! with a warning, and the session continues.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::memory::WordPairModel;
use crate::profile::UserProfile;

const WORD_PAIR_FILE: &str = "word_pair_memory.json";
const SHORT_TERM_FILE: &str = "short_term_memory.json";
const LONG_TERM_FILE: &str = "long_term_memory.json";
const PROFILE_FILE: &str = "user_profile.json";

/// Snapshot of everything a session persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Short-term entries, oldest-first.
    pub short_term: Vec<String>,
    /// Long-term entries, oldest-first.
    pub long_term: Vec<String>,
    /// The categorized word-pair model.
    pub word_pairs: WordPairModel,
    /// User profile, including the serialized emotional state.
    pub profile: UserProfile,
}

/// Storage collaborator contract: load defaults-on-absence, save by
/// full overwrite.
pub trait StateStore {
    /// Load the persisted state, substituting defaults for anything missing
    /// or unreadable. Never fails.
    fn load(&self) -> SessionState;

    /// Persist a snapshot with full-overwrite semantics.
    ///
    /// # Errors
    /// Returns an error when the snapshot cannot be written; the caller
    /// decides whether that is fatal (the core treats it as a warning).
    fn save(&mut self, state: &SessionState) -> Result<()>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// JSON-file store rooted at a data directory.
#[derive(Debug)]
pub struct FileStateStore {
    root: PathBuf,
}

impl FileStateStore {
    /// Create a store rooted at `root`. The directory is created on first
    /// save, not here.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        info!(path = %root.display(), "state store rooted");
        Self { root }
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.root.join(file);
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(value) => value,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt state file, using defaults");
                    T::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => T::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable state file, using defaults");
                T::default()
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.root.join(file);
        let json = serde_json::to_vec_pretty(value)?;
        fs::write(&path, json)?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> SessionState {
        let state = SessionState {
            short_term: self.read_or_default(SHORT_TERM_FILE),
            long_term: self.read_or_default(LONG_TERM_FILE),
            word_pairs: self.read_or_default(WORD_PAIR_FILE),
            profile: self.read_or_default(PROFILE_FILE),
        };
        debug!(
            short_term = state.short_term.len(),
            long_term = state.long_term.len(),
            "session state loaded"
        );
        state
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        // Ordering is the crash-consistency contract; see module docs.
        self.write_json(WORD_PAIR_FILE, &state.word_pairs)?;
        self.write_json(SHORT_TERM_FILE, &state.short_term)?;
        self.write_json(LONG_TERM_FILE, &state.long_term)?;
        self.write_json(PROFILE_FILE, &state.profile)?;
        debug!(path = %self.root.display(), "session state saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store (tests)
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: SessionState,
    /// Number of completed saves.
    pub save_count: usize,
}

impl MemoryStateStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved snapshot.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> SessionState {
        self.state.clone()
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        self.state = state.clone();
        self.save_count += 1;
        Ok(())
    }
}
