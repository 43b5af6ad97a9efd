//! Domain layer: pure game logic types and helpers.

pub mod game_transition;
pub mod mission;
pub mod roles;
pub mod round;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod victory;
pub mod voting;

#[cfg(test)]
pub(crate) mod test_state_helpers;


// Re-exports for ergonomics
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use roles::assign_roles;
pub use round::{cast_vote, new_round, propose_group, submit_action, ActionOutcome, VoteOutcome};
pub use rules::{enemy_count, required_group_size, MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS};
pub use state::{Game, GameStatus, Player, Role, Round, RoundResult, RoundStatus, Team};
pub use victory::WinTally;
