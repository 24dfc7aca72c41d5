//! Seeded shuffling, the only source of randomness in a cross-validation run.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffle `items` uniformly at random; the same seed always yields the
/// same permutation.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Draw a fresh seed for runs that were not given one.
pub fn random_seed() -> u64 {
    rand::random()
}
