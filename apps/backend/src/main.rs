use actix_web::{web, App, HttpServer};
use kilo_backend::config::app::Config;
use kilo_backend::middleware::cors::cors_middleware;
use kilo_backend::middleware::request_trace::RequestTrace;
use kilo_backend::middleware::structured_logger::StructuredLogger;
use kilo_backend::routes;
use kilo_backend::state::builder::StateBuilder;
use kilo_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        runtime_env = ?config.runtime_env,
        token_ttl = %config.token_ttl,
        "starting kilo auth backend"
    );

    let data = web::Data::new(StateBuilder::from_config(&config).build());
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
