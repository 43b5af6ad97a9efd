//! Lobby HTTP routes: create, search, look up, join and start games.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Deserializer};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::player_headers::check_length;
use crate::extractors::{GameId, PlayerHeaders, Validate, ValidatedJson};
use crate::protocol::ApiResponse;
use crate::services::{GameFlowService, GameService, SearchParams};
use crate::state::app_state::AppState;

/// Header values are trimmed by `PlayerHeaders`, so body credentials must be too.
fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|p| p.trim().to_string()))
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub owner: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    pub password: Option<String>,
}

impl Validate for CreateGameRequest {
    fn validate(&self) -> Result<(), AppError> {
        check_length("name", &self.name, ErrorCode::InvalidGameName)?;
        check_length("owner", &self.owner, ErrorCode::InvalidPlayerName)?;
        match self.password.as_deref() {
            Some(p) if !p.is_empty() => check_length("password", p, ErrorCode::InvalidPassword),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateGameRequest {
        name,
        owner,
        password,
    } = body.into_inner();
    let summary = GameService::new()
        .create_game(&app_state, &name, &owner, password)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::new(201, "Game Created", summary)))
}

/// GET /api/games?name=&status=&page=&limit=
async fn search_games(
    query: web::Query<SearchQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SearchQuery {
        name,
        status,
        page,
        limit,
    } = query.into_inner();
    let games = GameService::new()
        .search_games(
            &app_state,
            SearchParams {
                name,
                status,
                page,
                limit,
            },
        )
        .await?;
    let msg = format!("Search returned {} result(s)", games.len());
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, msg, games)))
}

/// GET /api/games/{gameId}
async fn get_game(
    game_id: GameId,
    caller: PlayerHeaders,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summary = GameService::new()
        .get_game(&app_state, game_id.0, &caller.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Game Found", summary)))
}

/// PUT /api/games/{gameId}
async fn join_game(
    game_id: GameId,
    caller: PlayerHeaders,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summary = GameService::new()
        .join_game(&app_state, game_id.0, &caller.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Joined Game", summary)))
}

/// HEAD /api/games/{gameId}/start
///
/// No body on success; failures still carry Problem Details headers.
async fn start_game(
    game_id: GameId,
    caller: PlayerHeaders,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    GameFlowService
        .start_game(&app_state, game_id.0, &caller.0)
        .await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(search_games)),
    )
    .service(
        web::resource("/{gameId}")
            .route(web::get().to(get_game))
            .route(web::put().to(join_game)),
    )
    .service(web::resource("/{gameId}/start").route(web::head().to(start_game)));
}
