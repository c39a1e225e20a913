//! Random number sources for the generators.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Returns an RNG for the configured seed, seeding from entropy when absent.
///
/// The same seed always yields the same stream, which makes generated levels reproducible.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::random();
            SmallRng::seed_from_u64(seed)
        }
    }
}
