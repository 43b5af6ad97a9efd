//! In-memory adapter for the game store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::state::Game;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::{GameQuery, GameStore};

#[derive(Default)]
struct Inner {
    games: HashMap<Uuid, Game>,
    /// Game ids in creation order.
    order: Vec<Uuid>,
}

/// Process-local game store. One `RwLock` covers the map and the creation
/// order so the name check and the insert are a single step.
#[derive(Default)]
pub struct GameStoreMem {
    inner: RwLock<Inner>,
}

impl GameStoreMem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for GameStoreMem {
    async fn find_by_id(&self, game_id: Uuid) -> Result<Option<Game>, DomainError> {
        Ok(self.inner.read().games.get(&game_id).cloned())
    }

    async fn insert(&self, game: Game) -> Result<Game, DomainError> {
        let mut inner = self.inner.write();
        if inner.games.values().any(|g| g.name == game.name) {
            return Err(DomainError::conflict(
                ConflictKind::GameNameTaken,
                format!("A game named {} already exists", game.name),
            ));
        }
        inner.order.push(game.id);
        inner.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn replace(&self, mut game: Game) -> Result<Game, DomainError> {
        let mut inner = self.inner.write();
        let stored = inner.games.get_mut(&game.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {} not found", game.id))
        })?;
        if stored.lock_version != game.lock_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game lock version mismatch: expected {}, but game has version {}",
                    game.lock_version, stored.lock_version
                ),
            ));
        }
        game.lock_version += 1;
        *stored = game.clone();
        Ok(game)
    }

    async fn search(&self, query: &GameQuery) -> Result<Vec<Game>, DomainError> {
        let inner = self.inner.read();
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.games.get(id))
            .filter(|g| query.matches(g))
            .skip(query.offset())
            .take(query.limit as usize)
            .cloned()
            .collect())
    }
}
