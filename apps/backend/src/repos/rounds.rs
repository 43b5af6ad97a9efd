//! Round store contract for the service layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::state::{Round, RoundResult};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait RoundStore: Send + Sync {
    /// Rounds are scoped by game: a round id from another game is not found.
    async fn find_by_id(&self, game_id: Uuid, round_id: Uuid) -> Result<Option<Round>, DomainError>;

    async fn insert(&self, round: Round) -> Result<Round, DomainError>;

    /// Optimistic replace keyed on `lock_version`.
    async fn replace(&self, round: Round) -> Result<Round, DomainError>;

    /// Number of ended rounds of a game with the given result.
    async fn count_by_result(&self, game_id: Uuid, result: RoundResult)
        -> Result<usize, DomainError>;

    /// All rounds of a game, most recent first.
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Round>, DomainError>;
}

/// Load a round or fail with `NotFound`.
pub async fn require_round(
    store: &dyn RoundStore,
    game_id: Uuid,
    round_id: Uuid,
) -> Result<Round, DomainError> {
    store.find_by_id(game_id, round_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
    })
}
