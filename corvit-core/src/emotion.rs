//! Persistent emotional state and its lexical update rules.
//!
//! Three named intensities mutated additively by trigger words found in each
//! input. Rules form a priority cascade — the first matching rule fires and
//! the rest are skipped. Sadness is floored at zero after every update;
//! happiness and anger are unbounded in both directions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EmotionConfig;
use crate::types::{tokenize, trim_token};

/// The three tracked emotions, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    /// Raised by agent mentions and positive trigger words.
    Happiness,
    /// Raised by negative trigger words, lowered by name mentions; never
    /// negative.
    Sadness,
    /// Tracked but only mutated indirectly (reserved trigger slot).
    Anger,
}

/// Fixed-key emotional intensity vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    /// Happiness intensity, unbounded.
    #[serde(default)]
    pub happiness: f64,
    /// Sadness intensity, floored at 0.
    #[serde(default)]
    pub sadness: f64,
    /// Anger intensity, unbounded.
    #[serde(default)]
    pub anger: f64,
}

impl EmotionalState {
    /// Neutral state, all intensities zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the lexical trigger cascade for one input.
    ///
    /// In priority order, first match wins:
    /// 1. input mentions `user_name` → sadness −1
    /// 2. input mentions an agent-reference or good word → happiness +1,
    ///    sadness −0.5
    /// 3. input mentions a bad word → sadness +4, happiness −1
    ///
    /// Matching is case-insensitive on punctuation-trimmed tokens.
    pub fn apply(&mut self, input: &str, user_name: &str, config: &EmotionConfig) {
        let tokens = tokenize(input);
        let tokens: Vec<&str> = tokens.iter().map(|t| trim_token(t)).collect();
        let mentions = |word: &str| tokens.contains(&word);
        let mentions_any =
            |words: &[String]| words.iter().any(|w| mentions(w.to_lowercase().as_str()));

        if mentions(user_name.to_lowercase().as_str()) {
            self.sadness -= 1.0;
        } else if mentions_any(&config.agent_words) || mentions_any(&config.good_words) {
            self.happiness += 1.0;
            self.sadness -= 0.5;
        } else if mentions_any(&config.bad_words) {
            self.sadness += 4.0;
            self.happiness -= 1.0;
        }

        self.sadness = self.sadness.max(0.0);
        debug!(
            happiness = self.happiness,
            sadness = self.sadness,
            anger = self.anger,
            "emotional state updated"
        );
    }

    /// The emotion currently holding the maximum intensity.
    ///
    /// Ties break by fixed priority: happiness > sadness > anger.
    #[must_use]
    pub fn dominant(&self) -> Emotion {
        if self.happiness >= self.sadness && self.happiness >= self.anger {
            Emotion::Happiness
        } else if self.sadness >= self.anger {
            Emotion::Sadness
        } else {
            Emotion::Anger
        }
    }

    /// The fixed annotation sentence for the dominant emotion.
    #[must_use]
    pub fn annotation(&self) -> &'static str {
        match self.dominant() {
            Emotion::Happiness => "I'm glad to hear that!",
            Emotion::Sadness => "I'm sorry to hear that.",
            Emotion::Anger => "I understand your frustration.",
        }
    }

    /// Reset all intensities to zero (explicit new-session action).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
