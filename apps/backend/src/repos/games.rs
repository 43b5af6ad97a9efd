//! Game store contract for the service layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::state::{Game, GameStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 250;

/// Search filter for the lobby listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameQuery {
    /// Case-insensitive substring of the game name.
    pub name: Option<String>,
    pub status: Option<GameStatus>,
    pub page: u32,
    pub limit: u32,
}

impl Default for GameQuery {
    fn default() -> Self {
        Self {
            name: None,
            status: None,
            page: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl GameQuery {
    pub fn matches(&self, game: &Game) -> bool {
        let name_ok = self.name.as_deref().is_none_or(|needle| {
            game.name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let status_ok = self.status.is_none_or(|s| s == game.status);
        name_ok && status_ok
    }

    pub fn offset(&self) -> usize {
        self.page as usize * self.limit as usize
    }
}

/// Persistence boundary for game documents.
///
/// `insert` must enforce name uniqueness atomically. `replace` compares the
/// stored `lock_version` with the incoming one and bumps it on success.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn find_by_id(&self, game_id: Uuid) -> Result<Option<Game>, DomainError>;

    async fn insert(&self, game: Game) -> Result<Game, DomainError>;

    async fn replace(&self, game: Game) -> Result<Game, DomainError>;

    /// Matching games in creation order, one page.
    async fn search(&self, query: &GameQuery) -> Result<Vec<Game>, DomainError>;
}

/// Load a game or fail with `NotFound`.
pub async fn require_game(store: &dyn GameStore, game_id: Uuid) -> Result<Game, DomainError> {
    store.find_by_id(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}
