use uuid::Uuid;

use crate::domain::state::{Game, GameStatus, RoundResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub status: GameStatus,
    pub current_round: Option<Uuid>,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        Self {
            status: game.status,
            current_round: game.current_round,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: Game moved from Lobby -> Rounds
    GameStarted,

    /// Edge-triggered: Game moved to Ended
    GameEnded,

    /// Edge-triggered: the game points at a different round
    RoundOpened { round_id: Uuid },

    /// Explicit: the leader's group went to a vote
    GroupProposed { round_id: Uuid },

    /// Explicit: a vote rejected the proposal and the leader proposes again
    ProposalRejected { round_id: Uuid },

    /// Explicit: the group was approved and goes on the mission
    GroupApproved { round_id: Uuid },

    /// Explicit: a round was sealed with a result
    RoundEnded { round_id: Uuid, result: RoundResult },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if before.status == GameStatus::Lobby && after.status == GameStatus::Rounds {
        transitions.push(GameTransition::GameStarted);
    }

    if let Some(round_id) = after.current_round {
        if before.current_round != Some(round_id) {
            transitions.push(GameTransition::RoundOpened { round_id });
        }
    }

    if before.status != GameStatus::Ended && after.status == GameStatus::Ended {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
