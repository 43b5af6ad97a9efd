use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

fn parse_segment(req: &HttpRequest, name: &str, code: ErrorCode) -> Result<Uuid, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))
}

/// `{gameId}` path segment parsed as a UUID. Existence is checked by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub Uuid);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_segment(req, "gameId", ErrorCode::InvalidGameId).map(GameId))
    }
}

/// `{gameId}` and `{roundId}` path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPath {
    pub game_id: Uuid,
    pub round_id: Uuid,
}

impl FromRequest for RoundPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = parse_segment(req, "gameId", ErrorCode::InvalidGameId).and_then(|game_id| {
            parse_segment(req, "roundId", ErrorCode::InvalidRoundId)
                .map(|round_id| RoundPath { game_id, round_id })
        });
        ready(parsed)
    }
}
