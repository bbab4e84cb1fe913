//! Seeded series generators.
//!
//! Every generator is deterministic in its seed. Pair generators derive two
//! decorrelated streams from one seed so a single trial number reproduces
//! both series.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::Normal;

/// Offset mixed into a pair's second seed to decorrelate its stream.
const PAIR_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Random walk: cumulative sum of `N(0, noise^2)` innovations.
///
/// `noise` must be positive and finite.
pub fn random_walk(len: usize, noise: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise).unwrap();

    let mut level = 0.0;
    (0..len)
        .map(|_| {
            level += normal.sample(&mut rng);
            level
        })
        .collect()
}

/// Two independent random walks from one trial seed.
pub fn random_walk_pair(len: usize, noise: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    (
        random_walk(len, noise, seed),
        random_walk(len, noise, seed ^ PAIR_SEED_MIX),
    )
}

/// Random walk around a deterministic linear trend: `trend * i + walk_i`.
pub fn trending_walk(len: usize, trend: f64, noise: f64, seed: u64) -> Vec<f64> {
    random_walk(len, noise, seed)
        .into_iter()
        .enumerate()
        .map(|(i, w)| trend * i as f64 + w)
        .collect()
}

/// Two trending walks sharing the trend slope but with independent noise.
pub fn trending_pair(len: usize, trend: f64, noise: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    (
        trending_walk(len, trend, noise, seed),
        trending_walk(len, trend, noise, seed ^ PAIR_SEED_MIX),
    )
}
