//! Accumulated user profile — phrase classification and goal extraction.
//!
//! The profile is a persisted record of how the user speaks: inputs are
//! classified as first-person or third-person by indicator words, and
//! `goal:`-prefixed fragments are collected separately. The serialized
//! emotional state rides along in the same record.

use serde::{Deserialize, Serialize};

use crate::emotion::EmotionalState;
use crate::types::{tokenize, trim_token};

const FIRST_PERSON_INDICATORS: [&str; 5] = ["i", "me", "my", "myself", "mine"];
const THIRD_PERSON_INDICATORS: [&str; 7] = ["he", "she", "they", "his", "her", "their", "them"];
const GOAL_MARKER: &str = "goal:";

/// Persisted per-user record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Inputs containing a first-person indicator.
    #[serde(default)]
    pub first_person_phrases: Vec<String>,
    /// Inputs containing a third-person indicator.
    #[serde(default)]
    pub third_person_phrases: Vec<String>,
    /// Goals extracted from first-person inputs.
    #[serde(default)]
    pub first_person_goals: Vec<String>,
    /// Goals extracted from third-person inputs.
    #[serde(default)]
    pub third_person_goals: Vec<String>,
    /// Emotional state at the last save.
    #[serde(default)]
    pub emotional_state: EmotionalState,
}

impl UserProfile {
    /// Create an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one input and record it (and any extracted goal) in the
    /// matching phrase list. First-person wins when both indicator sets match.
    pub fn observe(&mut self, input: &str) {
        if speaks_in_first_person(input) {
            self.first_person_phrases.push(input.to_string());
            if let Some(goal) = extract_goal(input) {
                self.first_person_goals.push(goal);
            }
        } else if speaks_in_third_person(input) {
            self.third_person_phrases.push(input.to_string());
            if let Some(goal) = extract_goal(input) {
                self.third_person_goals.push(goal);
            }
        }
    }
}

/// Whether the input contains a first-person indicator word.
#[must_use]
pub fn speaks_in_first_person(input: &str) -> bool {
    contains_indicator(input, &FIRST_PERSON_INDICATORS)
}

/// Whether the input contains a third-person indicator word.
#[must_use]
pub fn speaks_in_third_person(input: &str) -> bool {
    contains_indicator(input, &THIRD_PERSON_INDICATORS)
}

fn contains_indicator(input: &str, indicators: &[&str]) -> bool {
    tokenize(input)
        .iter()
        .any(|token| indicators.contains(&trim_token(token)))
}

/// Extract the text following a `goal:` marker, if present.
#[must_use]
pub fn extract_goal(input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    let start = lower.find(GOAL_MARKER)? + GOAL_MARKER.len();
    let goal = input[start..].trim();
    if goal.is_empty() {
        None
    } else {
        Some(goal.to_string())
    }
}
