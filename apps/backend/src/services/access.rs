//! Caller identity and game access checks.

use crate::domain::state::Game;
use crate::errors::domain::{DomainError, ForbiddenKind};

/// Who is calling, as claimed by the request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub player: String,
    pub password: Option<String>,
}

impl Caller {
    pub fn new(player: impl Into<String>, password: Option<String>) -> Self {
        Self {
            player: player.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }
}

/// Fails with `Unauthorized` when the game is protected and the password is missing or wrong.
pub fn check_password(game: &Game, password: Option<&str>) -> Result<(), DomainError> {
    match game.password.as_deref() {
        Some(expected) if !expected.is_empty() => {
            if password == Some(expected) {
                Ok(())
            } else {
                Err(DomainError::unauthorized(format!(
                    "Invalid credentials for game {}",
                    game.id
                )))
            }
        }
        _ => Ok(()),
    }
}

/// Membership first, then password: a stranger is `Forbidden` whatever password they send.
pub fn authorize_member(game: &Game, caller: &Caller) -> Result<(), DomainError> {
    if !game.is_member(&caller.player) {
        return Err(DomainError::forbidden(
            ForbiddenKind::NotAMember,
            format!("Player {} is not part of game {}", caller.player, game.id),
        ));
    }
    check_password(game, caller.password.as_deref())
}
