use tracing::{debug, info};
use uuid::Uuid;

use super::mutation::{GameFlowMutationResult, MutationOutput};
use super::GameFlowService;
use crate::domain::game_transition::GameTransition;
use crate::domain::roles::assign_roles;
use crate::domain::round::new_round;
use crate::domain::rules::{can_start_with, MAX_ROUNDS, MIN_PLAYERS};
use crate::domain::seed_derivation::{derive_leader_seed, derive_roles_seed, rng_for};
use crate::domain::state::{Game, GameStatus, Round, RoundResult};
use crate::domain::victory::{evaluate_game_end, WinTally};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind, PreconditionKind};
use crate::services::access::{authorize_member, Caller};
use crate::state::app_state::AppState;

impl GameFlowService {
    /// Owner starts the game: roles are dealt and round 1 opens.
    ///
    /// Check order: membership, password, ownership, lobby status, player count.
    pub async fn start_game(
        &self,
        state: &AppState,
        game_id: Uuid,
        caller: &Caller,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        debug!(game_id = %game_id, player = %caller.player, "Starting game");

        self.run_mutation(state, game_id, |mut game| async move {
            authorize_member(&game, caller)?;
            if !game.is_owner(&caller.player) {
                return Err(DomainError::forbidden(
                    ForbiddenKind::NotOwner,
                    format!("Only the owner {} can start the game", game.owner),
                )
                .into());
            }
            if game.status != GameStatus::Lobby {
                return Err(DomainError::conflict(
                    ConflictKind::AlreadyStarted,
                    "Game already started",
                )
                .into());
            }
            if !can_start_with(game.players.len()) {
                return Err(DomainError::precondition(
                    PreconditionKind::NotEnoughPlayers,
                    format!(
                        "At least {MIN_PLAYERS} players are needed, game has {}",
                        game.players.len()
                    ),
                )
                .into());
            }

            let mut rng = rng_for(derive_roles_seed(game.rng_seed));
            assign_roles(&mut game.players, &mut rng)?;
            game.status = GameStatus::Rounds;
            self.open_round(state, &mut game, 1).await?;

            let game = state.games.replace(game).await?;
            info!(
                game_id = %game_id,
                players = game.players.len(),
                enemies = game.enemy_names().len(),
                "Game started"
            );
            Ok::<_, AppError>(MutationOutput::new(game, ()))
        })
        .await
    }

    /// Open round `round_no`, persist it and point the game at it.
    ///
    /// The game itself is not persisted here; the caller owns that write.
    pub(super) async fn open_round(
        &self,
        state: &AppState,
        game: &mut Game,
        round_no: u8,
    ) -> Result<Round, AppError> {
        let mut rng = rng_for(derive_leader_seed(game.rng_seed, round_no));
        let round = new_round(game, round_no, &mut rng)?;
        let round = state.rounds.insert(round).await?;

        game.reset_players_transient();
        game.current_round = Some(round.id);
        game.touch();

        info!(
            game_id = %game.id,
            round_id = %round.id,
            round_no,
            leader = %round.leader,
            "Round opened"
        );
        Ok(round)
    }

    /// Follow-up once `round` has been persisted as ended.
    ///
    /// Ends the game when a team has three missions or the last round is
    /// done, otherwise opens the next round.
    pub(super) async fn conclude_round(
        &self,
        state: &AppState,
        game: &mut Game,
        round: &Round,
        transitions: &mut Vec<GameTransition>,
    ) -> Result<(), AppError> {
        transitions.push(GameTransition::RoundEnded {
            round_id: round.id,
            result: round.result,
        });

        let tally = WinTally {
            citizens: state
                .rounds
                .count_by_result(game.id, RoundResult::Citizens)
                .await?,
            enemies: state
                .rounds
                .count_by_result(game.id, RoundResult::Enemies)
                .await?,
        };
        info!(
            game_id = %game.id,
            round_no = round.round_no,
            result = ?round.result,
            citizens = tally.citizens,
            enemies = tally.enemies,
            "Round ended"
        );

        if evaluate_game_end(game, &tally) {
            info!(game_id = %game.id, winner = ?tally.winner(), "Game ended");
            return Ok(());
        }

        if round.round_no >= MAX_ROUNDS {
            // No round after the fifth.
            game.status = GameStatus::Ended;
            game.touch();
            info!(game_id = %game.id, leader = ?tally.leader(), "Game ended at round limit");
            return Ok(());
        }

        self.open_round(state, game, round.round_no + 1).await?;
        Ok(())
    }
}
