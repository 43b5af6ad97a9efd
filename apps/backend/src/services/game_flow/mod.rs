//! Game flow orchestration service - bridges pure round logic with the stores.
//!
//! Every mutating method runs through `run_mutation`, which serializes work
//! per game and reports the resulting lifecycle transitions.

mod mutation;
mod player_actions;
mod queries;
mod round_lifecycle;


/// Game flow service - stateless; shared resources come from `AppState`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

pub use mutation::{GameFlowMutationResult, MutationOutput};
