use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::IdentityContext;
use crate::error::AppError;

/// Authenticated identity placed in request extensions by the
/// [`crate::middleware::KiloAuth`] gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub IdentityContext);

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req
            .extensions()
            .get::<IdentityContext>()
            .cloned()
            .map(Identity)
            .ok_or(AppError::MissingBearer);
        ready(identity)
    }
}
