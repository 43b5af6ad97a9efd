use tracing::{debug, info, warn};
use uuid::Uuid;

use super::mutation::{GameFlowMutationResult, MutationOutput};
use super::GameFlowService;
use crate::domain::game_transition::GameTransition;
use crate::domain::round::{self, ActionOutcome, VoteOutcome};
use crate::error::AppError;
use crate::protocol::RoundDetail;
use crate::repos::rounds::require_round;
use crate::services::access::{authorize_member, Caller};
use crate::state::app_state::AppState;

impl GameFlowService {
    /// Leader proposes the mission group for the current vote.
    pub async fn propose_group(
        &self,
        state: &AppState,
        game_id: Uuid,
        round_id: Uuid,
        caller: &Caller,
        members: Vec<String>,
    ) -> Result<GameFlowMutationResult<RoundDetail>, AppError> {
        debug!(game_id = %game_id, round_id = %round_id, player = %caller.player, ?members, "Proposing group");

        self.run_mutation(state, game_id, |game| async move {
            authorize_member(&game, caller)?;
            let mut round = require_round(state.rounds.as_ref(), game_id, round_id).await?;

            round::propose_group(&mut round, &game, &caller.player, &members).inspect_err(|err| {
                warn!(game_id = %game_id, round_id = %round_id, player = %caller.player, error = %err, "Proposal rejected");
            })?;
            let round = state.rounds.replace(round).await?;

            info!(game_id = %game_id, round_id = %round_id, group = ?round.group, "Group proposed");
            Ok::<_, AppError>(
                MutationOutput::new(game, RoundDetail::from(&round))
                    .with_transitions(vec![GameTransition::GroupProposed { round_id }]),
            )
        })
        .await
    }

    /// Record a vote on the proposed group; the last vote triggers the tally.
    pub async fn cast_vote(
        &self,
        state: &AppState,
        game_id: Uuid,
        round_id: Uuid,
        caller: &Caller,
        approve: bool,
    ) -> Result<GameFlowMutationResult<RoundDetail>, AppError> {
        debug!(game_id = %game_id, round_id = %round_id, player = %caller.player, approve, "Casting vote");

        self.run_mutation(state, game_id, |mut game| async move {
            authorize_member(&game, caller)?;
            let mut round = require_round(state.rounds.as_ref(), game_id, round_id).await?;

            let outcome = round::cast_vote(&mut round, &mut game, &caller.player, approve)
                .inspect_err(|err| {
                    warn!(game_id = %game_id, round_id = %round_id, player = %caller.player, error = %err, "Vote rejected");
                })?;
            let round = state.rounds.replace(round).await?;

            let mut transitions = Vec::new();
            match outcome {
                VoteOutcome::Recorded => {}
                VoteOutcome::GroupApproved => {
                    info!(game_id = %game_id, round_id = %round_id, "Group approved");
                    transitions.push(GameTransition::GroupApproved { round_id });
                }
                VoteOutcome::GroupRejected { phase } => {
                    info!(game_id = %game_id, round_id = %round_id, ?phase, "Group rejected");
                    transitions.push(GameTransition::ProposalRejected { round_id });
                }
                VoteOutcome::RoundLost => {
                    info!(game_id = %game_id, round_id = %round_id, "Third rejection, round lost");
                    self.conclude_round(state, &mut game, &round, &mut transitions)
                        .await?;
                }
            }

            let game = state.games.replace(game).await?;
            Ok::<_, AppError>(
                MutationOutput::new(game, RoundDetail::from(&round)).with_transitions(transitions),
            )
        })
        .await
    }

    /// Record a group member's mission action; the last action resolves the mission.
    pub async fn submit_action(
        &self,
        state: &AppState,
        game_id: Uuid,
        round_id: Uuid,
        caller: &Caller,
        collaborate: bool,
    ) -> Result<GameFlowMutationResult<RoundDetail>, AppError> {
        debug!(game_id = %game_id, round_id = %round_id, player = %caller.player, collaborate, "Submitting action");

        self.run_mutation(state, game_id, |mut game| async move {
            authorize_member(&game, caller)?;
            let mut round = require_round(state.rounds.as_ref(), game_id, round_id).await?;

            let outcome = round::submit_action(&mut round, &mut game, &caller.player, collaborate)
                .inspect_err(|err| {
                    warn!(game_id = %game_id, round_id = %round_id, player = %caller.player, error = %err, "Action rejected");
                })?;
            let round = state.rounds.replace(round).await?;

            let mut transitions = Vec::new();
            if let ActionOutcome::MissionResolved(result) = outcome {
                info!(game_id = %game_id, round_id = %round_id, ?result, "Mission resolved");
                self.conclude_round(state, &mut game, &round, &mut transitions)
                    .await?;
            }

            let game = state.games.replace(game).await?;
            Ok::<_, AppError>(
                MutationOutput::new(game, RoundDetail::from(&round)).with_transitions(transitions),
            )
        })
        .await
    }
}
