use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::{Game, GameStatus, Round, RoundResult, RoundStatus, VotePhase};

/// Success envelope shared by every JSON endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, msg: impl Into<String>, data: T) -> Self {
        Self {
            status,
            msg: msg.into(),
            data,
        }
    }
}

/// Public projection of a game.
///
/// `enemies` is only filled for callers who are enemies themselves; everyone
/// else gets an empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub status: GameStatus,
    /// Whether joining requires a password.
    pub password: bool,
    pub current_round: Option<Uuid>,
    pub players: Vec<String>,
    pub enemies: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl GameSummary {
    /// Projection without hidden information.
    pub fn public(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            owner: game.owner.clone(),
            status: game.status,
            password: game.has_password(),
            current_round: game.current_round,
            players: game.player_names(),
            enemies: Vec::new(),
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }

    /// Projection as seen by `viewer`.
    pub fn for_viewer(game: &Game, viewer: &str) -> Self {
        let mut summary = Self::public(game);
        if game.player(viewer).is_some_and(|p| p.is_enemy()) {
            summary.enemies = game.enemy_names();
        }
        summary
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDetail {
    pub id: Uuid,
    pub round_no: u8,
    pub leader: String,
    pub status: RoundStatus,
    pub result: RoundResult,
    pub phase: VotePhase,
    pub group: Vec<String>,
    pub votes: Vec<bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&Round> for RoundDetail {
    fn from(round: &Round) -> Self {
        Self {
            id: round.id,
            round_no: round.round_no,
            leader: round.leader.clone(),
            status: round.status,
            result: round.result,
            phase: round.phase,
            group: round.group.clone(),
            votes: round.votes.clone(),
            created_at: round.created_at,
            updated_at: round.updated_at,
        }
    }
}
