//! Repository traits for domain layer.

pub mod games;
pub mod rounds;

pub use games::{GameQuery, GameStore};
pub use rounds::RoundStore;
