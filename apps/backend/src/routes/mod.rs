use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod rounds;

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::InvalidPagination, format!("Invalid query: {err}")).into()
}

/// Mount every route: health at the root, game routes under `/api/games`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api/games")
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .configure(games::configure_routes)
            .configure(rounds::configure_routes),
    );
}
