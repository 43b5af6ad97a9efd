use actix_web::{web, App, HttpServer};
use contamina::config::ServerConfig;
use contamina::infra::state::build_state;
use contamina::middleware::cors::cors_middleware;
use contamina::middleware::request_trace::RequestTrace;
use contamina::middleware::structured_logger::StructuredLogger;
use contamina::middleware::trace_span::TraceSpan;
use contamina::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // CONTAMINA_HOST, CONTAMINA_PORT and CORS_ALLOWED_ORIGINS come from the runtime environment.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_config(config.clone()).build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.host, port = config.port, "Starting Contamina backend");

    let data = web::Data::new(app_state);
    let origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
