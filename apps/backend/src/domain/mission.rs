//! Mission action gating and resolution.

use crate::domain::state::{Player, RoundResult};
use crate::errors::domain::{DomainError, ForbiddenKind};

/// Only enemies may sabotage; anybody may collaborate.
pub fn check_action_allowed(player: &Player, collaborate: bool) -> Result<(), DomainError> {
    if !collaborate && !player.is_enemy() {
        return Err(DomainError::forbidden(
            ForbiddenKind::SabotageNotAllowed,
            format!("Player {} cannot sabotage the mission", player.name),
        ));
    }
    Ok(())
}

/// One sabotage is enough to lose the mission.
pub fn resolve_mission(actions: &[bool]) -> RoundResult {
    if actions.iter().any(|&collaborate| !collaborate) {
        RoundResult::Enemies
    } else {
        RoundResult::Citizens
    }
}

/// Resolve once every group member has acted, `None` while actions are outstanding.
pub fn resolve_if_complete(actions: &[bool], group_size: usize) -> Option<RoundResult> {
    if actions.len() < group_size {
        return None;
    }
    Some(resolve_mission(actions))
}
