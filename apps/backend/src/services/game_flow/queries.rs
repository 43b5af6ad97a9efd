use uuid::Uuid;

use super::GameFlowService;
use crate::error::AppError;
use crate::protocol::RoundDetail;
use crate::repos::games::require_game;
use crate::repos::rounds::require_round;
use crate::services::access::{authorize_member, Caller};
use crate::state::app_state::AppState;

impl GameFlowService {
    /// Rounds of a game, most recent first. Empty while the game is in the lobby.
    pub async fn get_rounds(
        &self,
        state: &AppState,
        game_id: Uuid,
        caller: &Caller,
    ) -> Result<Vec<RoundDetail>, AppError> {
        let game = require_game(state.games.as_ref(), game_id).await?;
        authorize_member(&game, caller)?;

        let rounds = state.rounds.list_by_game(game_id).await?;
        Ok(rounds.iter().map(RoundDetail::from).collect())
    }

    pub async fn get_round_detail(
        &self,
        state: &AppState,
        game_id: Uuid,
        round_id: Uuid,
        caller: &Caller,
    ) -> Result<RoundDetail, AppError> {
        let game = require_game(state.games.as_ref(), game_id).await?;
        authorize_member(&game, caller)?;

        let round = require_round(state.rounds.as_ref(), game_id, round_id).await?;
        Ok(RoundDetail::from(&round))
    }
}
