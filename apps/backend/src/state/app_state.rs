use std::sync::Arc;

use crate::config::ServerConfig;
use crate::infra::game_locks::GameLocks;
use crate::infra::seed_source::SeedSource;
use crate::repos::{GameStore, RoundStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameStore>,
    pub rounds: Arc<dyn RoundStore>,
    /// Per-game mutation locks
    pub locks: Arc<GameLocks>,
    /// Base seed for every new game
    pub seeds: Arc<dyn SeedSource>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(
        games: Arc<dyn GameStore>,
        rounds: Arc<dyn RoundStore>,
        seeds: Arc<dyn SeedSource>,
        config: ServerConfig,
    ) -> Self {
        Self {
            games,
            rounds,
            locks: Arc::new(GameLocks::new()),
            seeds,
            config,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("locked_games", &self.locks.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
