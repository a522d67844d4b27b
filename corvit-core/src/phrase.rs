//! Phrase-length selection.
//!
//! A reply's target length is drawn from a fixed categorical distribution,
//! scaled by the total observed weight of the category slice being walked.
//! The scaling cancels out of the relative probabilities; it exists so the
//! chooser goes through the same [`weighted_sample`] interface as next-word
//! selection, and so a weightless model degrades to the fallback length
//! instead of an all-zero draw.

use std::collections::BTreeMap;

use rand::Rng;

use crate::sampler::weighted_sample;

/// Candidate phrase lengths and their probabilities (sums to 1).
pub const LENGTH_DISTRIBUTION: [(usize, f64); 4] =
    [(3, 0.1), (5, 0.3), (7, 0.4), (10, 0.2)];

/// Length used when the model carries no sampling weight at all.
pub const FALLBACK_LENGTH: usize = 1;

/// Choose a target phrase length for a category slice whose counts sum to
/// `total_weight`.
///
/// Zero total weight means no length can be meaningfully chosen; the
/// fallback length bounds the walk to a single word.
#[must_use]
pub fn choose_length(total_weight: u64, rng: &mut impl Rng) -> usize {
    if total_weight == 0 {
        return FALLBACK_LENGTH;
    }
    let weights: BTreeMap<usize, f64> = LENGTH_DISTRIBUTION
        .iter()
        .map(|(length, prob)| (*length, prob * total_weight as f64))
        .collect();
    weighted_sample(&weights, rng)
        .copied()
        .unwrap_or(FALLBACK_LENGTH)
}
