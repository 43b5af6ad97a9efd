//! Lobby services: create, join, look up and search games.

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::rules::MAX_PLAYERS;
use crate::domain::state::{Game, GameStatus, Player, PlayerType};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::protocol::GameSummary;
use crate::repos::games::{require_game, GameQuery, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::services::access::{authorize_member, check_password, Caller};
use crate::state::app_state::AppState;

/// Raw search parameters as they arrive from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub name: Option<String>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl SearchParams {
    /// Validate into a store query.
    pub fn into_query(self) -> Result<GameQuery, DomainError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(GameStatus::parse(raw).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidGameStatus,
                    format!("Invalid game status '{raw}'"),
                )
            })?),
        };

        let page = self.page.unwrap_or(0);
        if page < 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPagination,
                format!("Page must be zero or positive, got {page}"),
            ));
        }
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT as i64);
        if !(1..=MAX_PAGE_LIMIT as i64).contains(&limit) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPagination,
                format!("Limit must be within 1..={MAX_PAGE_LIMIT}, got {limit}"),
            ));
        }

        Ok(GameQuery {
            name: self.name.filter(|n| !n.trim().is_empty()),
            status,
            page: u32::try_from(page).map_err(|_| {
                DomainError::validation(ValidationKind::InvalidPagination, "Page is too large")
            })?,
            limit: limit as u32,
        })
    }
}

/// Game domain service.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Open a new lobby owned by `owner`. Names are unique across games.
    pub async fn create_game(
        &self,
        state: &AppState,
        name: &str,
        owner: &str,
        password: Option<String>,
    ) -> Result<GameSummary, AppError> {
        let game = Game::new(name, owner, password, state.seeds.next_seed());
        let game = state.games.insert(game).await?;
        info!(game_id = %game.id, name = %game.name, owner = %game.owner, "Game created");
        Ok(GameSummary::for_viewer(&game, owner))
    }

    /// Add `caller` to a lobby.
    ///
    /// Check order: password, lobby status, duplicate name, capacity.
    pub async fn join_game(
        &self,
        state: &AppState,
        game_id: Uuid,
        caller: &Caller,
    ) -> Result<GameSummary, AppError> {
        debug!(game_id = %game_id, player = %caller.player, "Joining game");
        let _guard = state.locks.acquire(game_id).await;

        let mut game = require_game(state.games.as_ref(), game_id).await?;
        check_password(&game, caller.password.as_deref())?;
        if game.status != GameStatus::Lobby {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                "Game already started",
            )
            .into());
        }
        if game.is_member(&caller.player) {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyJoined,
                format!("Player {} is already part of the game", caller.player),
            )
            .into());
        }
        if game.players.len() >= MAX_PLAYERS {
            return Err(DomainError::conflict(
                ConflictKind::GameFull,
                format!("Game already has {MAX_PLAYERS} players"),
            )
            .into());
        }

        game.players
            .push(Player::new(caller.player.clone(), PlayerType::Participant));
        game.touch();
        let game = state.games.replace(game).await?;

        info!(game_id = %game_id, player = %caller.player, players = game.players.len(), "Player joined");
        Ok(GameSummary::for_viewer(&game, &caller.player))
    }

    /// A member's view of the game; enemies see their teammates.
    pub async fn get_game(
        &self,
        state: &AppState,
        game_id: Uuid,
        caller: &Caller,
    ) -> Result<GameSummary, AppError> {
        let game = require_game(state.games.as_ref(), game_id).await?;
        authorize_member(&game, caller)?;
        Ok(GameSummary::for_viewer(&game, &caller.player))
    }

    /// Public listing; hidden roles are never included.
    pub async fn search_games(
        &self,
        state: &AppState,
        params: SearchParams,
    ) -> Result<Vec<GameSummary>, AppError> {
        let query = params.into_query()?;
        debug!(?query, "Searching games");
        let games = state.games.search(&query).await?;
        Ok(games.iter().map(GameSummary::public).collect())
    }
}
