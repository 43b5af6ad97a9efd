//! Round state machine: leader, proposal, vote and mission action.
//!
//! ```text
//! waiting-on-leader --propose--> voting --approve--> waiting-on-group --last action--> ended
//!        ^                          |
//!        +------ reject (phase++) --+--- reject at vote3 ---------------------------> ended
//! ```
//!
//! Functions here mutate a loaded `Round` (and the players' transient state
//! on the `Game`) in memory. Locking and persistence belong to the caller.

use std::collections::HashSet;

use rand::Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::mission::{check_action_allowed, resolve_if_complete};
use crate::domain::rules::{required_group_size, MAX_ROUNDS};
use crate::domain::state::{
    ActionState, Game, Round, RoundResult, RoundStatus, VotePhase, VoteState,
};
use crate::domain::voting::{tally_if_complete, TallyOutcome};
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, PreconditionKind, ValidationKind,
};

/// What a recorded vote did to the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum VoteOutcome {
    /// Still waiting on other players.
    Recorded,
    /// Majority approved; the group goes on the mission.
    GroupApproved,
    /// Proposal rejected; the leader proposes again in `phase`.
    GroupRejected { phase: VotePhase },
    /// Third rejection; the round is lost for the citizens.
    RoundLost,
}

/// What a recorded action did to the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionOutcome {
    Recorded,
    MissionResolved(RoundResult),
}

/// Open round `round_no` with a uniformly drawn leader.
pub fn new_round<R: Rng + ?Sized>(
    game: &Game,
    round_no: u8,
    rng: &mut R,
) -> Result<Round, DomainError> {
    if round_no == 0 || round_no > MAX_ROUNDS {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundNumber,
            format!("Round number must be within 1..={MAX_ROUNDS}, got {round_no}"),
        ));
    }
    if game.players.is_empty() {
        return Err(DomainError::precondition(
            PreconditionKind::NotEnoughPlayers,
            "Cannot open a round without players",
        ));
    }

    let leader_idx = rng.random_range(0..game.players.len());
    let now = OffsetDateTime::now_utc();
    Ok(Round {
        id: Uuid::new_v4(),
        game_id: game.id,
        round_no,
        leader: game.players[leader_idx].name.clone(),
        status: RoundStatus::WaitingOnLeader,
        phase: VotePhase::Vote1,
        group: Vec::new(),
        votes: Vec::new(),
        actions: Vec::new(),
        result: RoundResult::None,
        lock_version: 0,
        created_at: now,
        updated_at: now,
    })
}

/// Leader names the mission group.
pub fn propose_group(
    round: &mut Round,
    game: &Game,
    caller: &str,
    members: &[String],
) -> Result<(), DomainError> {
    if round.leader != caller {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotLeader,
            format!("Only the leader {} can propose a group", round.leader),
        ));
    }
    match round.status {
        RoundStatus::WaitingOnLeader => {}
        RoundStatus::Voting if !round.group.is_empty() => {
            return Err(DomainError::conflict(
                ConflictKind::GroupAlreadyProposed,
                "A group was already proposed for this vote",
            ));
        }
        other => {
            return Err(phase_mismatch("propose a group", other));
        }
    }

    let required = required_group_size(game.players.len(), round.round_no).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidRoundNumber,
            format!(
                "No group size for {} players in round {}",
                game.players.len(),
                round.round_no
            ),
        )
    })?;
    if members.len() != required {
        return Err(DomainError::validation(
            ValidationKind::InvalidGroupSize,
            format!("Group must have {required} members, got {}", members.len()),
        ));
    }

    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.as_str()) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateGroupMember,
                format!("Player {member} appears more than once"),
            ));
        }
    }
    if let Some(unknown) = members.iter().find(|m| !game.is_member(m)) {
        return Err(DomainError::validation(
            ValidationKind::UnknownGroupMember,
            format!("Player {unknown} is not in this game"),
        ));
    }

    round.group = members.to_vec();
    round.votes.clear();
    round.status = RoundStatus::Voting;
    round.touch();
    Ok(())
}

/// Record one player's vote; tallies once every player has voted.
pub fn cast_vote(
    round: &mut Round,
    game: &mut Game,
    caller: &str,
    approve: bool,
) -> Result<VoteOutcome, DomainError> {
    if round.status != RoundStatus::Voting {
        return Err(phase_mismatch("vote", round.status));
    }
    let player = game.player_mut(caller).ok_or_else(|| not_a_member(caller))?;
    if player.vote != VoteState::None {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyVoted,
            format!("Player {caller} already voted on this proposal"),
        ));
    }

    player.vote = if approve {
        VoteState::Approve
    } else {
        VoteState::Reject
    };
    round.votes.push(approve);
    round.touch();

    let outcome = match tally_if_complete(&round.votes, game.players.len()) {
        None => VoteOutcome::Recorded,
        Some(TallyOutcome::Approved) => {
            round.status = RoundStatus::WaitingOnGroup;
            VoteOutcome::GroupApproved
        }
        Some(TallyOutcome::Rejected) => match round.phase.next() {
            Some(phase) => {
                round.phase = phase;
                round.group.clear();
                round.votes.clear();
                round.status = RoundStatus::WaitingOnLeader;
                game.reset_votes();
                VoteOutcome::GroupRejected { phase }
            }
            None => {
                round.status = RoundStatus::Ended;
                round.result = RoundResult::Enemies;
                VoteOutcome::RoundLost
            }
        },
    };
    Ok(outcome)
}

/// Record one group member's mission action; resolves once the group is done.
pub fn submit_action(
    round: &mut Round,
    game: &mut Game,
    caller: &str,
    collaborate: bool,
) -> Result<ActionOutcome, DomainError> {
    if round.status != RoundStatus::WaitingOnGroup {
        return Err(phase_mismatch("act", round.status));
    }
    if !round.in_group(caller) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotInGroup,
            format!("Player {caller} is not part of the mission group"),
        ));
    }
    let player = game.player_mut(caller).ok_or_else(|| not_a_member(caller))?;
    if player.action != ActionState::None {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyActed,
            format!("Player {caller} already acted on this mission"),
        ));
    }
    check_action_allowed(player, collaborate)?;

    player.action = if collaborate {
        ActionState::Collaborate
    } else {
        ActionState::Sabotage
    };
    round.actions.push(collaborate);
    round.touch();

    match resolve_if_complete(&round.actions, round.group.len()) {
        None => Ok(ActionOutcome::Recorded),
        Some(result) => {
            round.status = RoundStatus::Ended;
            round.result = result;
            Ok(ActionOutcome::MissionResolved(result))
        }
    }
}

fn phase_mismatch(action: &str, status: RoundStatus) -> DomainError {
    DomainError::precondition(
        PreconditionKind::PhaseMismatch,
        format!("Cannot {action} while the round is {status:?}"),
    )
}

fn not_a_member(caller: &str) -> DomainError {
    DomainError::forbidden(
        ForbiddenKind::NotAMember,
        format!("Player {caller} is not in this game"),
    )
}
