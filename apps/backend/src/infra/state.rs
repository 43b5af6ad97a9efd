use std::sync::Arc;

use crate::adapters::{GameStoreMem, RoundStoreMem};
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::infra::seed_source::{FixedSeedSource, OsSeedSource, SeedSource};
use crate::repos::{GameStore, RoundStore};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: ServerConfig,
    seeds: Option<Arc<dyn SeedSource>>,
    games: Option<Arc<dyn GameStore>>,
    rounds: Option<Arc<dyn RoundStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            seeds: None,
            games: None,
            rounds: None,
        }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Deterministic game seeds starting at `start`.
    pub fn with_fixed_seeds(mut self, start: u64) -> Self {
        self.seeds = Some(Arc::new(FixedSeedSource::new(start)));
        self
    }

    pub fn with_seed_source(mut self, seeds: Arc<dyn SeedSource>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    pub fn with_stores(mut self, games: Arc<dyn GameStore>, rounds: Arc<dyn RoundStore>) -> Self {
        self.games = Some(games);
        self.rounds = Some(rounds);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        if self.config.port == 0 {
            return Err(AppError::config("Server port must be non-zero"));
        }
        let games = self
            .games
            .unwrap_or_else(|| Arc::new(GameStoreMem::new()));
        let rounds = self
            .rounds
            .unwrap_or_else(|| Arc::new(RoundStoreMem::new()));
        let seeds = self.seeds.unwrap_or_else(|| Arc::new(OsSeedSource));
        Ok(AppState::new(games, rounds, seeds, self.config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
