//! Corvit benchmark suite.
//!
//! Hot paths of the reply pipeline:
//!   roulette_sample_1000_keys ... one weighted draw over a large slice
//!   respond_seeded_model ........ full reply walk over a populated model
//!   record_full_turn ............ promotion scan + ingestion + observation

use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use corvit_core::config::{MemoryTiersConfig, ReplyConfig};
use corvit_core::emotion::EmotionalState;
use corvit_core::generate::respond;
use corvit_core::memory::{MemoryStore, WordPairModel};
use corvit_core::sampler::weighted_sample;
use corvit_core::types::{Category, tokenize};

fn seeded_model(sentences: usize) -> WordPairModel {
    let mut model = WordPairModel::new();
    for i in 0..sentences {
        let line = format!(
            "the w{} jumped over the w{} near the w{} today.",
            i % 37,
            (i * 7) % 37,
            (i * 13) % 37
        );
        model.observe(&Category::of_input(&line), &tokenize(&line));
    }
    model
}

/// Benchmark: one roulette-wheel draw over 1000 weighted keys.
fn bench_weighted_sample(c: &mut Criterion) {
    let weights: BTreeMap<String, u32> = (0..1000)
        .map(|i| (format!("word{i}"), (i % 50) + 1))
        .collect();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("roulette_sample_1000_keys", |b| {
        b.iter(|| {
            let picked = weighted_sample(black_box(&weights), &mut rng);
            black_box(picked);
        });
    });
}

/// Benchmark: a full reply walk over a model seeded with 500 sentences.
fn bench_respond(c: &mut Criterion) {
    let model = seeded_model(500);
    let emotions = EmotionalState::new();
    let reply = ReplyConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("respond_seeded_model", |b| {
        b.iter(|| {
            let text = respond(black_box(&model), &emotions, &reply, &mut rng);
            black_box(text);
        });
    });
}

/// Benchmark: one full `record` turn against populated memory tiers.
fn bench_record(c: &mut Criterion) {
    c.bench_function("record_full_turn", |b| {
        let mut memory = MemoryStore::new(&MemoryTiersConfig::default());
        memory.record("the lighthouse keeper waved at the ships");
        memory.record("storms rolled in from the west that night");
        memory.record("morning came quiet and grey over the bay");
        b.iter(|| {
            memory.record(black_box("the keeper watched the storms from the bay"));
        });
    });
}

criterion_group!(
    benches,
    bench_weighted_sample,
    bench_respond,
    bench_record
);
criterion_main!(benches);
