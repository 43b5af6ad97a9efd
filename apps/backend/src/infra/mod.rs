//! Infrastructure layer - shared state assembly, locking and seeding.

pub mod game_locks;
pub mod seed_source;
pub mod state;
