//! Token-stream generators shared across unit tests, integration tests and
//! benches.
//!
//! This module is always compiled but hidden from documentation.
//! Every generator takes a seed and draws from a seeded `StdRng`, so the same
//! arguments give the same tokens and counter values measured on them are
//! reproducible.

#![doc(hidden)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// `n` distinct words in ascending order: `w000000`, `w000001`, ...
///
/// Fixed-width numbering makes byte order match numeric order, which is the
/// worst case for the unbalanced tree.
pub fn sequential_words(n: usize) -> Vec<String> {
    (0..n).map(word).collect()
}

/// The same `n` words as `sequential_words`, shuffled by `seed`.
pub fn scrambled_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut words = sequential_words(n);
    words.shuffle(&mut rng);
    words
}

/// `len` tokens drawn from a vocabulary of `vocabulary` words, where low ranks
/// are far more frequent than high ones (density roughly `1 / rank`).
///
/// Models running text: a few words repeat constantly, most appear once or
/// twice.
pub fn zipf_like_tokens(vocabulary: usize, len: usize, seed: u64) -> Vec<String> {
    if vocabulary == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let span = (vocabulary as f64).ln();
    (0..len)
        .map(|_| {
            // log-uniform in [1, vocabulary)
            let rank = (rng.random::<f64>() * span).exp() as usize - 1;
            word(rank.min(vocabulary - 1))
        })
        .collect()
}

/// `words` repeated `times` times, round-robin.
pub fn repeated(words: &[&str], times: usize) -> Vec<String> {
    let mut tokens = Vec::with_capacity(words.len() * times);
    for _ in 0..times {
        tokens.extend(words.iter().map(|w| (*w).to_string()));
    }
    tokens
}

fn word(rank: usize) -> String {
    format!("w{:06}", rank)
}
