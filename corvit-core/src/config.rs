//! Configuration for the Corvit engine.
//!
//! Maps directly to `corvit.toml`; every field has a default so an empty
//! file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};

/// Top-level Corvit configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorvitConfig {
    /// Memory tier capacities.
    #[serde(default)]
    pub memory: MemoryTiersConfig,
    /// Lexical trigger word sets for emotional updates.
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Reply generation settings.
    #[serde(default)]
    pub reply: ReplyConfig,
    /// Persistence / save settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Encyclopedia lookup settings.
    #[serde(default)]
    pub lookup: LookupConfig,
}

impl CorvitConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns [`crate::CorvitError::Config`] if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CorvitError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Capacities for the two bounded memory tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryTiersConfig {
    /// Short-term queue capacity (K).
    #[serde(default = "default_short_term_capacity")]
    pub short_term_capacity: usize,
    /// Long-term queue capacity (L).
    #[serde(default = "default_long_term_capacity")]
    pub long_term_capacity: usize,
}

impl Default for MemoryTiersConfig {
    fn default() -> Self {
        Self {
            short_term_capacity: default_short_term_capacity(),
            long_term_capacity: default_long_term_capacity(),
        }
    }
}

/// Word sets that trigger emotional-state updates.
///
/// All matching is case-insensitive on punctuation-trimmed tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Ways the user might refer to the bot itself.
    #[serde(default = "default_agent_words")]
    pub agent_words: Vec<String>,
    /// Positive-sentiment trigger words.
    #[serde(default = "default_good_words")]
    pub good_words: Vec<String>,
    /// Negative-sentiment trigger words.
    #[serde(default = "default_bad_words")]
    pub bad_words: Vec<String>,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            agent_words: default_agent_words(),
            good_words: default_good_words(),
            bad_words: default_bad_words(),
        }
    }
}

/// Reply generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Reply emitted when the word-pair model is empty or the turn is a no-op.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            fallback_reply: default_fallback_reply(),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Directory holding the state snapshot files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Session transcript file (JSON lines, append-only).
    #[serde(default = "default_transcript_file")]
    pub transcript_file: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            transcript_file: default_transcript_file(),
        }
    }
}

/// Encyclopedia lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the REST endpoint.
    #[serde(default = "default_lookup_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_lookup_timeout_ms")]
    pub timeout_ms: u64,
    /// Category tag fetched text is learned under.
    #[serde(default = "default_lookup_tag")]
    pub category_tag: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_lookup_base_url(),
            timeout_ms: default_lookup_timeout_ms(),
            category_tag: default_lookup_tag(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_short_term_capacity() -> usize {
    3
}

fn default_long_term_capacity() -> usize {
    5
}

fn default_agent_words() -> Vec<String> {
    ["you", "yourself", "yours", "bot", "chatbot", "ai", "corvit"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_good_words() -> Vec<String> {
    ["love", "like", "great", "good", "awesome", "thanks", "thank"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_bad_words() -> Vec<String> {
    ["hate", "stupid", "awful", "terrible", "bad", "useless"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_fallback_reply() -> String {
    "I'm not sure what you mean. Can you elaborate?".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_transcript_file() -> String {
    "session.log".to_string()
}

fn default_lookup_base_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}

fn default_lookup_timeout_ms() -> u64 {
    5_000
}

fn default_lookup_tag() -> String {
    "encyclopedia".to_string()
}
