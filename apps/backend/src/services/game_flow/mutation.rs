use std::future::Future;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::state::{Game, GameStatus};
use crate::repos::games::require_game;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;
use crate::AppError;

/// What a mutation closure hands back: the game as it now stands in the
/// store, any explicit transitions, and the caller-facing value.
#[derive(Debug)]
pub struct MutationOutput<T> {
    pub game: Game,
    pub transitions: Vec<GameTransition>,
    pub value: T,
}

impl<T> MutationOutput<T> {
    pub fn new(game: Game, value: T) -> Self {
        Self {
            game,
            transitions: Vec::new(),
            value,
        }
    }

    pub fn with_transitions(mut self, transitions: Vec<GameTransition>) -> Self {
        self.transitions = transitions;
        self
    }
}

#[derive(Debug)]
pub struct GameFlowMutationResult<T> {
    pub final_game: Game,
    pub transitions: Vec<GameTransition>,
    pub value: T,
}

impl GameFlowService {
    /// Run `mutation` on `game_id` while holding that game's lock.
    ///
    /// The game is loaded under the lock (missing game -> `NotFound`) and
    /// handed to the closure, which validates, mutates and persists. Edge
    /// transitions are derived from the before/after lifecycle views and
    /// merged with the explicit ones the closure returned. Once a game has
    /// ended its lock entry is pruned after the guard is released.
    pub async fn run_mutation<T, F, Fut>(
        &self,
        state: &AppState,
        game_id: Uuid,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(Game) -> Fut,
        Fut: Future<Output = Result<MutationOutput<T>, AppError>>,
    {
        let guard = state.locks.acquire(game_id).await;

        let game = require_game(state.games.as_ref(), game_id).await?;
        let before = GameLifecycleView::from(&game);

        let MutationOutput {
            game: final_game,
            transitions: mut explicit_transitions,
            value,
        } = mutation(game).await?;

        let after = GameLifecycleView::from(&final_game);
        let mut transitions = derive_game_transitions(&before, &after);
        transitions.append(&mut explicit_transitions);

        for transition in &transitions {
            info!(game_id = %game_id, ?transition, "Game transition");
        }

        drop(guard);
        if final_game.status == GameStatus::Ended && state.locks.prune(game_id) {
            debug!(game_id = %game_id, "Released lock entry for ended game");
        }

        Ok(GameFlowMutationResult {
            final_game,
            transitions,
            value,
        })
    }
}
