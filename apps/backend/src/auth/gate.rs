//! Request gate for Kilo bearer tokens.
//!
//! `AuthGate::intercept` is a pure decision over the request method and
//! headers; wiring it into actix lives in [`crate::middleware::kilo_auth`].

use std::time::SystemTime;

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::http::Method;
use tracing::{debug, warn};

use crate::auth::claims::{is_expired, IdentityContext, KiloClaims};
use crate::auth::clock::unix_seconds;
use crate::auth::codec::{decode_unverified, verify_and_decode, DecodeFailureKind};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through. Pre-flight requests carry no identity.
    Continue(Option<IdentityContext>),
    /// Answer with this error without running the handler.
    Reject(AppError),
}

pub struct AuthGate<'a> {
    security: &'a SecurityConfig,
}

impl<'a> AuthGate<'a> {
    pub fn new(security: &'a SecurityConfig) -> Self {
        Self { security }
    }

    pub fn intercept(&self, method: &Method, headers: &HeaderMap, now: SystemTime) -> Decision {
        if *method == Method::OPTIONS {
            return Decision::Continue(None);
        }

        let Some(token) = bearer_token(headers) else {
            return Decision::Reject(AppError::MissingBearer);
        };

        let claims = match verify_and_decode(token, self.security) {
            Ok(claims) => claims,
            Err(failure) => {
                if failure.kind == DecodeFailureKind::BadSignature {
                    let claimed = decode_unverified(token)
                        .map(|c| c.subject_id)
                        .unwrap_or_default();
                    warn!(claimed_subject = %claimed, detail = %failure.detail, "bearer token signature mismatch");
                } else {
                    debug!(kind = %failure.kind, detail = %failure.detail, "bearer token rejected");
                }
                return Decision::Reject(AppError::InvalidToken);
            }
        };

        let now = match unix_seconds(now) {
            Ok(now) => now,
            Err(e) => return Decision::Reject(AppError::internal(e.to_string())),
        };

        if is_expired(&claims, now) {
            debug!(subject = %claims.subject_id, exp = claims.exp, "bearer token expired");
            return Decision::Reject(AppError::ExpiredToken);
        }

        Decision::Continue(Some(claims.identity()))
    }
}

/// Raw token following the literal `Bearer ` prefix of the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Verified claims from the request's bearer credential. Expiry is not checked.
pub fn bearer_claims(headers: &HeaderMap, security: &SecurityConfig) -> Option<KiloClaims> {
    let token = bearer_token(headers)?;
    verify_and_decode(token, security).ok()
}
