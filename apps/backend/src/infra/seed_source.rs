//! Where new games get their base RNG seed.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

pub trait SeedSource: Send + Sync {
    fn next_seed(&self) -> u64;
}

/// Production source backed by the thread-local OS-seeded generator.
#[derive(Debug, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn next_seed(&self) -> u64 {
        rand::rng().random::<u64>()
    }
}

/// Deterministic source for tests: `start`, `start + 1`, ...
#[derive(Debug)]
pub struct FixedSeedSource {
    next: AtomicU64,
}

impl FixedSeedSource {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
