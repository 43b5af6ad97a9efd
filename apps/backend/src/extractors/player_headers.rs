//! Caller identity from the `player` and `password` headers.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::access::Caller;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 20;

/// Reject strings outside 3..=20 characters with a 400 of the given code.
pub fn check_length(field: &str, value: &str, code: ErrorCode) -> Result<(), AppError> {
    let len = value.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(AppError::invalid(
            code,
            format!("{field} must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters"),
        ))
    }
}

/// Required `player` header plus optional `password` header.
#[derive(Debug, Clone)]
pub struct PlayerHeaders(pub Caller);

impl PlayerHeaders {
    pub fn into_inner(self) -> Caller {
        self.0
    }

    fn parse(req: &HttpRequest) -> Result<Self, AppError> {
        let header = |name: &str| -> Result<Option<String>, AppError> {
            match req.headers().get(name) {
                None => Ok(None),
                Some(value) => value
                    .to_str()
                    .map(|v| Some(v.trim().to_string()))
                    .map_err(|_| {
                        AppError::bad_request(
                            ErrorCode::BadRequest,
                            format!("Header '{name}' is not valid text"),
                        )
                    }),
            }
        };

        let player = header("player")?.ok_or_else(|| {
            AppError::invalid(ErrorCode::InvalidPlayerName, "Missing player header")
        })?;
        check_length("player", &player, ErrorCode::InvalidPlayerName)?;

        let password = header("password")?.filter(|p| !p.is_empty());
        if let Some(password) = &password {
            check_length("password", password, ErrorCode::InvalidPassword)?;
        }

        Ok(Self(Caller::new(player, password)))
    }
}

impl FromRequest for PlayerHeaders {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req))
    }
}
