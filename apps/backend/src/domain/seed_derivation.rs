//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every game draws one base seed at creation. Role assignment and leader
//! selection derive their own seeds from it so each decision is reproducible
//! from the stored game document alone.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the seed used to hand out roles when the game starts.
pub fn derive_roles_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}

/// Derive the seed used to pick the leader of round `round_no`.
pub fn derive_leader_seed(game_seed: u64, round_no: u8) -> u64 {
    // Additive per-round stride on the raw seed; roles use a multiplier instead
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}

/// Deterministic generator for a derived seed.
pub fn rng_for(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
