//! Memory tiers and the [`MemoryStore`] aggregate.
//!
//! Three co-evolving structures per session: the short-term queue of recent
//! inputs, the long-term queue of promoted topics, and the categorized
//! word-pair model. Every input mutates some subset of them through
//! [`MemoryStore::record`].

pub mod long_term;
pub mod short_term;
pub mod word_pair;

pub use long_term::LongTermMemory;
pub use short_term::ShortTermMemory;
pub use word_pair::{CategorySlice, NextWordCounts, WordPairModel};

use tracing::debug;

use crate::config::MemoryTiersConfig;
use crate::types::{Category, tokenize};

/// Per-session aggregate of all three memory structures.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Recent raw inputs, capacity K.
    pub short_term: ShortTermMemory,
    /// Promoted topics, capacity L.
    pub long_term: LongTermMemory,
    /// The categorized word-pair model.
    pub pairs: WordPairModel,
}

impl MemoryStore {
    /// Create an empty store with the configured tier capacities.
    #[must_use]
    pub fn new(config: &MemoryTiersConfig) -> Self {
        Self {
            short_term: ShortTermMemory::new(config.short_term_capacity),
            long_term: LongTermMemory::new(config.long_term_capacity),
            pairs: WordPairModel::new(),
        }
    }

    /// Process one input: promote any mentioned short-term topic, append the
    /// input to short-term memory, and update the word-pair model under the
    /// input's category.
    ///
    /// Whitespace-only input is a no-op, not an error. Promotion runs before
    /// ingestion — an input always contains itself as a substring and must
    /// not promote itself.
    pub fn record(&mut self, input: &str) {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return;
        }
        self.promote_matching(input);
        self.ingest_to_short_term(input);
        self.pairs.observe(&Category::of_input(input), &tokens);
    }

    /// Move the first short-term topic that `input` mentions (case-insensitive
    /// substring) into long-term memory. At most one entry moves per call;
    /// scan order is insertion order.
    ///
    /// Returns the promoted topic, if any.
    pub fn promote_matching(&mut self, input: &str) -> Option<String> {
        let needle = input.to_lowercase();
        let position = self
            .short_term
            .iter()
            .position(|topic| needle.contains(&topic.to_lowercase()))?;
        let topic = self.short_term.remove(position)?;
        debug!(topic = %topic, "promoting short-term topic to long-term memory");
        self.long_term.retain(topic.clone());
        Some(topic)
    }

    /// Append `input` to short-term memory, evicting the oldest entry if
    /// capacity K is exceeded.
    pub fn ingest_to_short_term(&mut self, input: &str) {
        self.short_term.ingest(input.to_string());
    }
}
