//! The session context — one object owning everything a conversation needs.
//!
//! No ambient globals: memory tiers, emotional state, profile, RNG, and the
//! storage collaborator all live here, so sessions can run isolated and in
//! parallel under test. One input is fully processed (memory update →
//! emotional update → reply generation → persistence) before the next is
//! accepted.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::CorvitConfig;
use crate::emotion::EmotionalState;
use crate::generate::respond;
use crate::memory::{LongTermMemory, MemoryStore, ShortTermMemory};
use crate::persistence::{SessionState, StateStore};
use crate::profile::UserProfile;
use crate::transcript::TranscriptLogger;
use crate::types::{Category, tokenize};

/// One conversation session.
pub struct Session<S: StateStore> {
    config: CorvitConfig,
    user_name: String,
    memory: MemoryStore,
    emotions: EmotionalState,
    profile: UserProfile,
    store: S,
    transcript: Option<TranscriptLogger>,
    rng: StdRng,
    turn_count: u64,
}

impl<S: StateStore> Session<S> {
    /// Open a session, restoring any persisted state from `store`.
    #[must_use]
    pub fn open(config: CorvitConfig, user_name: impl Into<String>, store: S) -> Self {
        Self::build(config, user_name.into(), store, StdRng::from_entropy())
    }

    /// Open a session with a fixed RNG seed (reproducible replies).
    #[must_use]
    pub fn open_seeded(
        config: CorvitConfig,
        user_name: impl Into<String>,
        store: S,
        seed: u64,
    ) -> Self {
        Self::build(config, user_name.into(), store, StdRng::seed_from_u64(seed))
    }

    fn build(config: CorvitConfig, user_name: String, store: S, rng: StdRng) -> Self {
        let state = store.load();
        let mut memory = MemoryStore::new(&config.memory);
        memory.short_term =
            ShortTermMemory::from_entries(state.short_term, config.memory.short_term_capacity);
        memory.long_term =
            LongTermMemory::from_entries(state.long_term, config.memory.long_term_capacity);
        memory.pairs = state.word_pairs;
        let emotions = state.profile.emotional_state;
        let profile = state.profile;

        info!(user = %user_name, "session opened");
        Self {
            config,
            user_name,
            memory,
            emotions,
            profile,
            store,
            transcript: None,
            rng,
            turn_count: 0,
        }
    }

    /// Attach a transcript logger (optional; turns are loggable either way).
    #[must_use]
    pub fn with_transcript(mut self, transcript: TranscriptLogger) -> Self {
        self.transcript = Some(transcript);
        self
    }

    /// Process one input line end to end and return the reply.
    ///
    /// Empty or whitespace-only input is a no-op turn: nothing is learned or
    /// persisted and the fallback reply comes back. A failing storage
    /// collaborator is a warning, never a crashed turn.
    pub fn process_turn(&mut self, input: &str) -> String {
        if let Some(transcript) = &self.transcript {
            transcript.log_turn(Some(input), None);
        }

        if tokenize(input).is_empty() {
            let reply = self.config.reply.fallback_reply.clone();
            if let Some(transcript) = &self.transcript {
                transcript.log_turn(None, Some(&reply));
            }
            return reply;
        }

        self.memory.record(input);
        self.profile.observe(input);
        self.emotions
            .apply(input, &self.user_name, &self.config.emotion);

        let reply = respond(
            &self.memory.pairs,
            &self.emotions,
            &self.config.reply,
            &mut self.rng,
        );

        self.persist();
        if let Some(transcript) = &self.transcript {
            transcript.log_turn(None, Some(&reply));
        }
        self.turn_count += 1;
        debug!(turn = self.turn_count, "turn processed");
        reply
    }

    /// Merge externally fetched text into the word-pair model under the
    /// configured category tag, exactly like any other input.
    pub fn learn_external(&mut self, text: &str) {
        let tag = Category::Tagged(self.config.lookup.category_tag.clone());
        self.memory.pairs.observe(&tag, &tokenize(text));
        info!(tag = %tag, "external text merged into word-pair model");
        self.persist();
    }

    /// Explicit new-session action: zero all emotional intensities.
    ///
    /// Memory tiers and the word-pair model are untouched.
    pub fn reset_emotions(&mut self) {
        self.emotions.reset();
        info!("emotional state reset");
        self.persist();
    }

    fn persist(&mut self) {
        self.profile.emotional_state = self.emotions;
        let state = SessionState {
            short_term: self.memory.short_term.snapshot(),
            long_term: self.memory.long_term.snapshot(),
            word_pairs: self.memory.pairs.clone(),
            profile: self.profile.clone(),
        };
        if let Err(e) = self.store.save(&state) {
            warn!(error = %e, "state save failed; session continues in memory");
        }
    }

    /// The memory store.
    #[must_use]
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// The current emotional state.
    #[must_use]
    pub fn emotions(&self) -> &EmotionalState {
        &self.emotions
    }

    /// The accumulated user profile.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Completed (non-no-op) turns this session.
    #[must_use]
    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    /// The storage collaborator (tests inspect saved snapshots through this).
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear the session down, handing the storage collaborator back.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStateStore;

    fn session() -> Session<MemoryStateStore> {
        Session::open_seeded(CorvitConfig::default(), "John", MemoryStateStore::new(), 7)
    }

    #[test]
    fn empty_input_is_a_no_op_turn() {
        let mut s = session();
        let reply = s.process_turn("   ");
        assert_eq!(reply, CorvitConfig::default().reply.fallback_reply);
        assert_eq!(s.turn_count(), 0);
        assert_eq!(s.store().save_count, 0);
    }

    #[test]
    fn each_real_turn_persists_a_snapshot() {
        let mut s = session();
        s.process_turn("the cat sat down");
        s.process_turn("the dog stood up");
        assert_eq!(s.store().save_count, 2);
        assert_eq!(s.store().state().short_term.len(), 2);
    }

    #[test]
    fn state_survives_reopen() {
        let mut s = session();
        s.process_turn("remember the lighthouse");
        s.process_turn("I love you, Corvit!");

        let store = s.into_store();
        let reopened = Session::open_seeded(CorvitConfig::default(), "John", store, 8);
        assert_eq!(reopened.memory().short_term.len(), 2);
        assert_eq!(reopened.emotions().happiness, 1.0);
    }

    #[test]
    fn learn_external_feeds_the_tagged_category() {
        let mut s = session();
        s.learn_external("Lighthouses guide ships at night");
        let tag = Category::Tagged("encyclopedia".to_string());
        assert_eq!(
            s.memory().pairs.pair_count(&tag, "lighthouses", "guide"),
            Some(0)
        );
        assert!(s.memory().short_term.is_empty());
    }

    #[test]
    fn reset_emotions_zeroes_and_persists() {
        let mut s = session();
        s.process_turn("I love you, Corvit!");
        assert!(s.emotions().happiness > 0.0);
        s.reset_emotions();
        assert_eq!(s.emotions().happiness, 0.0);
        assert_eq!(
            s.store().state().profile.emotional_state.happiness,
            0.0
        );
    }
}
