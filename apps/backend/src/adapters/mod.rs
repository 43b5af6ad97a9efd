//! Adapters for external dependencies.

pub mod games_mem;
pub mod rounds_mem;

pub use games_mem::GameStoreMem;
pub use rounds_mem::RoundStoreMem;
