//! Core type definitions for the Corvit engine.
//!
//! All types are serializable; categories serialize as plain strings so
//! they can key JSON maps.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input category
// ---------------------------------------------------------------------------

/// Classification of an input sentence, used to partition the word-pair model.
///
/// The three punctuation-derived categories are closed; [`Category::Tagged`]
/// is the extension point for collaborator-supplied tags (encyclopedia text,
/// third-person subjects, ...) so ad-hoc string keys never leak into the
/// model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Input ended with `?`.
    Question,
    /// Input ended with `!`.
    Exclamation,
    /// Any other input.
    Statement,
    /// Collaborator-supplied synthetic category.
    Tagged(String),
}

impl Category {
    /// Derive the category from an input's terminal punctuation.
    #[must_use]
    pub fn of_input(input: &str) -> Self {
        match input.trim_end().chars().last() {
            Some('?') => Self::Question,
            Some('!') => Self::Exclamation,
            _ => Self::Statement,
        }
    }

    /// String form used as a persisted map key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Question => "question",
            Self::Exclamation => "exclamation",
            Self::Statement => "statement",
            Self::Tagged(tag) => tag,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "question" => Self::Question,
            "exclamation" => Self::Exclamation,
            "statement" => Self::Statement,
            _ => Self::Tagged(s),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split an input into lowercase whitespace tokens.
///
/// Punctuation stays attached to its word: `"I love you, Corvit!"` tokenizes
/// to `["i", "love", "you,", "corvit!"]`. The word-pair model and the walk
/// termination rules both depend on that.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Strip leading and trailing non-alphanumeric characters from a token.
///
/// Lexical trigger matching (emotional updates, name mentions) uses this
/// view so `"corvit!"` still counts as a mention of `corvit`.
#[must_use]
pub fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Whether a generated word ends the walk (terminal punctuation).
#[must_use]
pub fn ends_phrase(word: &str) -> bool {
    matches!(word.chars().last(), Some('.' | '!' | '?' | ','))
}
