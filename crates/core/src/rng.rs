//! RNG module - seeded randomness for deterministic games
//!
//! Every random decision (cell fill, cell colour, shape draw) goes through an
//! `R: rand::Rng` owned by the session. Sessions built from a seed replay
//! identically, which is what tests and autoplay runs rely on.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG used by sessions created from a seed
pub type GameRng = StdRng;

/// Create a deterministic RNG for `seed`
pub fn seeded(seed: u64) -> GameRng {
    StdRng::seed_from_u64(seed)
}

/// Pick a seed from OS entropy, for games started without one
pub fn random_seed() -> u64 {
    rand::random()
}
