//! Hidden role assignment.

use rand::seq::index::sample;
use rand::Rng;

use crate::domain::rules::{can_start_with, enemy_count, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::{Player, Role};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Label every player citizen or enemy.
///
/// Exactly `enemy_count(players.len())` enemies are drawn uniformly without
/// replacement. Roles are permanent, so a second call on the same players is
/// rejected instead of reshuffling.
pub fn assign_roles<R: Rng + ?Sized>(
    players: &mut [Player],
    rng: &mut R,
) -> Result<(), DomainError> {
    if players.iter().any(|p| p.role != Role::Unassigned) {
        return Err(DomainError::conflict(
            ConflictKind::RolesAlreadyAssigned,
            "Roles were already assigned for this game",
        ));
    }

    let n = players.len();
    if !can_start_with(n) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Role assignment needs {MIN_PLAYERS}..={MAX_PLAYERS} players, got {n}"),
        ));
    }

    for player in players.iter_mut() {
        player.role = Role::Citizen;
    }
    for idx in sample(rng, n, enemy_count(n)) {
        players[idx].role = Role::Enemy;
    }

    Ok(())
}
