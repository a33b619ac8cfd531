use actix_web::web;

use crate::middleware::kilo_auth::KiloAuth;

pub mod auth;
pub mod health;
pub mod me;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same wiring, including the token gate on `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Token lifecycle: /auth/validate-token, /auth/refresh-token
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // Gate-protected API: /api/**
    cfg.service(
        web::scope("/api")
            .wrap(KiloAuth)
            .configure(me::configure_routes),
    );
}
