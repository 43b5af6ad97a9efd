// apps/backend/src/middleware/cors.rs
use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware with an explicit configuration:
/// - Origins come from `ServerConfig::cors_origins`
/// - Only allow methods actually used by the API
/// - Expose the identity and trace headers
pub fn cors_middleware(origins: &[String]) -> Cors {
    // Fallback to localhost-only if nothing valid was configured
    let fallback = [
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ];
    let effective_origins: &[String] = if origins.is_empty() {
        &fallback
    } else {
        origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "HEAD", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("player"),
            header::HeaderName::from_static("password"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
