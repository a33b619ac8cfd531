//! Kilo token gate middleware
//!
//! Runs [`AuthGate::intercept`] before the wrapped service. Rejections are
//! answered directly without invoking the handler; on success the identity is
//! stored in request extensions and mirrored into the `x-kilo-user-id` and
//! `x-kilo-env` request headers.

use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::claims::IdentityContext;
use crate::auth::gate::{AuthGate, Decision};
use crate::error::AppError;
use crate::state::app_state::AppState;

pub const USER_ID_HEADER: &str = "x-kilo-user-id";
pub const ENV_HEADER: &str = "x-kilo-env";

pub struct KiloAuth;

impl<S, B> Transform<S, ServiceRequest> for KiloAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = KiloAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(KiloAuthMiddleware { service }))
    }
}

pub struct KiloAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for KiloAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let decision = match req.app_data::<web::Data<AppState>>() {
            Some(state) => AuthGate::new(&state.security).intercept(
                req.method(),
                req.headers(),
                SystemTime::now(),
            ),
            None => Decision::Reject(AppError::internal("AppState not available")),
        };

        match decision {
            Decision::Reject(err) => {
                let res = req.error_response(err);
                Box::pin(async move { Ok(res.map_into_right_body()) })
            }
            Decision::Continue(identity) => {
                // Identity headers are only ever set by this middleware.
                req.headers_mut().remove(USER_ID_HEADER);
                req.headers_mut().remove(ENV_HEADER);
                if let Some(identity) = identity {
                    propagate_identity(&mut req, identity);
                }
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}

fn propagate_identity(req: &mut ServiceRequest, identity: IdentityContext) {
    for (name, value) in [
        (USER_ID_HEADER, &identity.subject_id),
        (ENV_HEADER, &identity.environment),
    ] {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                req.headers_mut()
                    .insert(HeaderName::from_static(name), value);
            }
            Err(_) => warn!(header = name, "identity value is not a valid header value"),
        }
    }
    req.extensions_mut().insert(identity);
}
