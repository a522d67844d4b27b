//! Roulette-wheel selection over a weight map.
//!
//! The same routine drives next-word selection and phrase-length selection.
//! Iteration order is the map's key order, which makes the degenerate
//! all-zero case deterministic.

use std::collections::BTreeMap;

use rand::Rng;

/// Pick one key from `weights` with probability proportional to its weight.
///
/// A uniform value is drawn in `[0, total_weight)` and weights are
/// accumulated in key order until the running sum reaches the draw.
///
/// - An empty map yields `None`; the caller must handle the no-selection case.
/// - Zero-weight entries are unreachable unless every weight is zero, in
///   which case the first key is returned (deterministic tie-break).
/// # Panics
/// Negative weights are a caller bug, not an input condition, and abort in
/// every build profile.
pub fn weighted_sample<'a, K, W>(
    weights: &'a BTreeMap<K, W>,
    rng: &mut impl Rng,
) -> Option<&'a K>
where
    W: Copy + Into<f64>,
{
    if weights.is_empty() {
        return None;
    }
    assert!(
        weights.values().all(|w| (*w).into() >= 0.0),
        "weighted_sample called with a negative weight"
    );

    let total: f64 = weights.values().map(|w| (*w).into()).sum();
    let draw = if total > 0.0 {
        rng.gen_range(0.0..total)
    } else {
        0.0
    };

    let mut cumulative = 0.0;
    let mut last = None;
    for (item, weight) in weights {
        cumulative += (*weight).into();
        last = Some(item);
        if cumulative >= draw {
            return Some(item);
        }
    }
    // Unreachable in exact arithmetic; guards float rounding at the tail.
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }

    #[test]
    fn empty_map_returns_none() {
        let weights: BTreeMap<String, u32> = BTreeMap::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(weighted_sample(&weights, &mut rng).is_none());
    }

    #[test]
    fn all_zero_weights_return_first_key() {
        let weights = map(&[("alpha", 0), ("beta", 0), ("gamma", 0)]);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            assert_eq!(
                weighted_sample(&weights, &mut rng).map(String::as_str),
                Some("alpha")
            );
        }
    }

    #[test]
    fn zero_weight_entry_is_never_drawn_among_positive() {
        let weights = map(&[("dead", 0), ("live", 5)]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(
                weighted_sample(&weights, &mut rng).map(String::as_str),
                Some("live")
            );
        }
    }

    #[test]
    fn single_entry_always_selected() {
        let weights = map(&[("only", 4)]);
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            weighted_sample(&weights, &mut rng).map(String::as_str),
            Some("only")
        );
    }

    #[test]
    fn empirical_frequencies_track_weights() {
        // {a: 1, b: 3} → ~25% / ~75% over 10 000 trials, ±5%.
        let weights = map(&[("a", 1), ("b", 3)]);
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 10_000;
        let mut a_count = 0usize;
        for _ in 0..trials {
            if weighted_sample(&weights, &mut rng).map(String::as_str) == Some("a") {
                a_count += 1;
            }
        }
        let a_freq = a_count as f64 / trials as f64;
        assert!(
            (a_freq - 0.25).abs() < 0.05,
            "expected ~0.25, observed {a_freq}"
        );
    }

    #[test]
    #[should_panic(expected = "negative weight")]
    fn negative_weight_aborts() {
        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        weights.insert("bad".to_string(), -1.0);
        let mut rng = StdRng::seed_from_u64(6);
        let _ = weighted_sample(&weights, &mut rng);
    }

    #[test]
    fn works_over_float_weights() {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        weights.insert(3, 0.1);
        weights.insert(5, 0.9);
        let mut rng = StdRng::seed_from_u64(5);
        let picked = weighted_sample(&weights, &mut rng);
        assert!(matches!(picked, Some(3 | 5)));
    }
}
