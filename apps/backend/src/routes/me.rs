use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::identity::Identity;

/// Identity of the caller, as established by the token gate.
async fn me(Identity(identity): Identity) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(identity))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
