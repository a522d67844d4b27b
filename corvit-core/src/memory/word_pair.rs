//! Categorized first-order word-adjacency model.
//!
//! Category → word → next-word → count. Counts follow the
//! second-occurrence-onward policy: a brand-new pair is registered at count
//! zero (the edge exists but carries no sampling weight) and only starts
//! accumulating weight when it is seen again.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Outgoing-edge counts for one word.
pub type NextWordCounts = BTreeMap<String, u32>;

/// One category's word → next-word → count mapping.
pub type CategorySlice = BTreeMap<String, NextWordCounts>;

/// The full categorized word-pair model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPairModel {
    categories: BTreeMap<Category, CategorySlice>,
}

impl WordPairModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every adjacent token pair of one input under `category`.
    ///
    /// First sighting of a pair registers it at count 0; each subsequent
    /// sighting increments by 1. Inputs with fewer than two tokens yield no
    /// pairs and leave the model untouched.
    pub fn observe(&mut self, category: &Category, tokens: &[String]) {
        if tokens.len() < 2 {
            return;
        }
        let slice = self.categories.entry(category.clone()).or_default();
        for pair in tokens.windows(2) {
            let next_counts = slice.entry(pair[0].clone()).or_default();
            match next_counts.entry(pair[1].clone()) {
                Entry::Occupied(mut seen) => *seen.get_mut() += 1,
                Entry::Vacant(unseen) => {
                    unseen.insert(0);
                }
            }
        }
    }

    /// The word → next-word mapping for one category, if populated.
    #[must_use]
    pub fn slice(&self, category: &Category) -> Option<&CategorySlice> {
        self.categories.get(category).filter(|s| !s.is_empty())
    }

    /// Categories that currently hold at least one word pair, in key order.
    pub fn populated_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(|(_, slice)| !slice.is_empty())
            .map(|(category, _)| category)
    }

    /// Whether no category holds any word pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populated_categories().next().is_none()
    }

    /// Sum of all counts in one category's slice.
    #[must_use]
    pub fn total_weight(&self, category: &Category) -> u64 {
        self.slice(category).map_or(0, |slice| {
            slice
                .values()
                .flat_map(BTreeMap::values)
                .map(|count| u64::from(*count))
                .sum()
        })
    }

    /// Current count for one (category, word, next-word) edge.
    #[must_use]
    pub fn pair_count(&self, category: &Category, word: &str, next: &str) -> Option<u32> {
        self.categories
            .get(category)?
            .get(word)?
            .get(next)
            .copied()
    }
}
