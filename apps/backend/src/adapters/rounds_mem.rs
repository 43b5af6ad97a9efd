//! In-memory adapter for the round store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::state::{Round, RoundResult};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::rounds::RoundStore;

#[derive(Default)]
pub struct RoundStoreMem {
    rounds: DashMap<Uuid, Round>,
}

impl RoundStoreMem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoundStore for RoundStoreMem {
    async fn find_by_id(&self, game_id: Uuid, round_id: Uuid) -> Result<Option<Round>, DomainError> {
        Ok(self
            .rounds
            .get(&round_id)
            .filter(|r| r.game_id == game_id)
            .map(|r| r.value().clone()))
    }

    async fn insert(&self, round: Round) -> Result<Round, DomainError> {
        if self.rounds.contains_key(&round.id) {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Round {} inserted twice", round.id),
            ));
        }
        self.rounds.insert(round.id, round.clone());
        Ok(round)
    }

    async fn replace(&self, mut round: Round) -> Result<Round, DomainError> {
        let mut stored = self.rounds.get_mut(&round.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Round, format!("Round {} not found", round.id))
        })?;
        if stored.lock_version != round.lock_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Round lock version mismatch: expected {}, but round has version {}",
                    round.lock_version, stored.lock_version
                ),
            ));
        }
        round.lock_version += 1;
        *stored = round.clone();
        Ok(round)
    }

    async fn count_by_result(
        &self,
        game_id: Uuid,
        result: RoundResult,
    ) -> Result<usize, DomainError> {
        Ok(self
            .rounds
            .iter()
            .filter(|r| r.game_id == game_id && r.is_ended() && r.result == result)
            .count())
    }

    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Round>, DomainError> {
        let mut rounds: Vec<Round> = self
            .rounds
            .iter()
            .filter(|r| r.game_id == game_id)
            .map(|r| r.value().clone())
            .collect();
        rounds.sort_by(|a, b| b.round_no.cmp(&a.round_no));
        Ok(rounds)
    }
}
