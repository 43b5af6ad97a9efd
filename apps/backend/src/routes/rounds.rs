//! Round HTTP routes: listing, detail, proposal, vote and mission action.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameId, PlayerHeaders, RoundPath, Validate, ValidatedJson};
use crate::protocol::ApiResponse;
use crate::services::GameFlowService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProposeGroupRequest {
    pub group: Vec<String>,
}

impl Validate for ProposeGroupRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.group.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::InvalidGroupSize,
                "Group must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote: bool,
}

impl Validate for VoteRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: bool,
}

impl Validate for ActionRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// GET /api/games/{gameId}/rounds
async fn list_rounds(
    game_id: GameId,
    caller: PlayerHeaders,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let rounds = GameFlowService
        .get_rounds(&app_state, game_id.0, &caller.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Rounds found", rounds)))
}

/// GET /api/games/{gameId}/rounds/{roundId}
async fn get_round(
    path: RoundPath,
    caller: PlayerHeaders,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round = GameFlowService
        .get_round_detail(&app_state, path.game_id, path.round_id, &caller.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Round found", round)))
}

/// PATCH /api/games/{gameId}/rounds/{roundId}
async fn propose_group(
    path: RoundPath,
    caller: PlayerHeaders,
    body: ValidatedJson<ProposeGroupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result = GameFlowService
        .propose_group(
            &app_state,
            path.game_id,
            path.round_id,
            &caller.0,
            body.into_inner().group,
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Group Created", result.value)))
}

/// POST /api/games/{gameId}/rounds/{roundId}
async fn cast_vote(
    path: RoundPath,
    caller: PlayerHeaders,
    body: ValidatedJson<VoteRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result = GameFlowService
        .cast_vote(&app_state, path.game_id, path.round_id, &caller.0, body.vote)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Voted successfully", result.value)))
}

/// PUT /api/games/{gameId}/rounds/{roundId}
async fn submit_action(
    path: RoundPath,
    caller: PlayerHeaders,
    body: ValidatedJson<ActionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result = GameFlowService
        .submit_action(&app_state, path.game_id, path.round_id, &caller.0, body.action)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(200, "Action registered", result.value)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{gameId}/rounds").route(web::get().to(list_rounds)))
        .service(
            web::resource("/{gameId}/rounds/{roundId}")
                .route(web::get().to(get_round))
                .route(web::patch().to(propose_group))
                .route(web::post().to(cast_vote))
                .route(web::put().to(submit_action)),
        );
}
