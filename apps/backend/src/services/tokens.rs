//! Token lifecycle: issue, validate and refresh Kilo tokens.

use std::time::SystemTime;

use thiserror::Error;
use tracing::{debug, info};

use crate::auth::claims::{is_expired, KiloClaims};
use crate::auth::clock::unix_seconds;
use crate::auth::codec::{sign, verify_and_decode, DecodeFailure};
use crate::auth::ttl::TokenTtl;
use crate::state::app_state::TokenDefaults;
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("no token supplied")]
    MissingToken,
    #[error("invalid token: {0}")]
    Invalid(#[from] DecodeFailure),
    #[error("token expired")]
    Expired,
    #[error("token is not expired yet")]
    NotYetExpired,
    #[error("{0} must not be empty")]
    EmptyClaim(&'static str),
    #[error("token lifetime of {0}s overflows the expiry timestamp")]
    ExpiryOverflow(i64),
    #[error("clock error: {0}")]
    Clock(String),
    #[error("{0}")]
    Signing(String),
}

/// Claims of a token that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedToken {
    pub subject_id: String,
    pub environment: String,
    pub schema_version: i64,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<KiloClaims> for ValidatedToken {
    fn from(claims: KiloClaims) -> Self {
        Self {
            subject_id: claims.subject_id,
            environment: claims.environment,
            schema_version: claims.schema_version,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// A replacement token minted by [`TokenService::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedToken {
    pub token: String,
    pub subject_id: String,
    pub environment: String,
}

/// Issue/validate/refresh bound to one signing configuration. Holds no
/// mutable state, so it is cheap to build per request.
pub struct TokenService<'a> {
    security: &'a SecurityConfig,
    defaults: &'a TokenDefaults,
}

impl<'a> TokenService<'a> {
    pub fn new(security: &'a SecurityConfig, defaults: &'a TokenDefaults) -> Self {
        Self { security, defaults }
    }

    /// Issue a token for `subject_id` with the configured environment and TTL.
    pub fn issue_default(&self, subject_id: &str) -> Result<String, TokenError> {
        self.issue(subject_id, &self.defaults.environment, self.defaults.ttl)
    }

    pub fn issue(
        &self,
        subject_id: &str,
        environment: &str,
        ttl: TokenTtl,
    ) -> Result<String, TokenError> {
        self.issue_at(subject_id, environment, ttl, SystemTime::now())
    }

    pub fn issue_at(
        &self,
        subject_id: &str,
        environment: &str,
        ttl: TokenTtl,
        now: SystemTime,
    ) -> Result<String, TokenError> {
        if subject_id.is_empty() {
            return Err(TokenError::EmptyClaim("subject id"));
        }
        if environment.is_empty() {
            return Err(TokenError::EmptyClaim("environment"));
        }

        let iat = unix_seconds(now).map_err(|e| TokenError::Clock(e.to_string()))?;
        let exp = iat
            .checked_add(ttl.as_seconds())
            .ok_or(TokenError::ExpiryOverflow(ttl.as_seconds()))?;
        let claims = KiloClaims::new(subject_id, environment, iat, exp);

        let token = sign(&claims, self.security).map_err(|e| TokenError::Signing(e.to_string()))?;
        debug!(subject = %subject_id, env = %environment, exp = claims.exp, "issued token");
        Ok(token)
    }

    pub fn validate(&self, token: Option<&str>) -> Result<ValidatedToken, TokenError> {
        self.validate_at(token, SystemTime::now())
    }

    pub fn validate_at(
        &self,
        token: Option<&str>,
        now: SystemTime,
    ) -> Result<ValidatedToken, TokenError> {
        let (claims, expired) = self.decode(token, now)?;
        if expired {
            return Err(TokenError::Expired);
        }
        Ok(claims.into())
    }

    /// Replace an expired token. Live tokens are refused with
    /// [`TokenError::NotYetExpired`]; callers use `validate` while a token is live.
    pub fn refresh(&self, token: Option<&str>) -> Result<RefreshedToken, TokenError> {
        self.refresh_at(token, SystemTime::now())
    }

    pub fn refresh_at(
        &self,
        token: Option<&str>,
        now: SystemTime,
    ) -> Result<RefreshedToken, TokenError> {
        let (claims, expired) = self.decode(token, now)?;
        if !expired {
            return Err(TokenError::NotYetExpired);
        }

        let token = self.issue_at(
            &claims.subject_id,
            &claims.environment,
            self.defaults.ttl,
            now,
        )?;
        info!(subject = %claims.subject_id, env = %claims.environment, "refreshed expired token");

        Ok(RefreshedToken {
            token,
            subject_id: claims.subject_id,
            environment: claims.environment,
        })
    }

    fn decode(
        &self,
        token: Option<&str>,
        now: SystemTime,
    ) -> Result<(KiloClaims, bool), TokenError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(TokenError::MissingToken)?;

        let claims = verify_and_decode(token, self.security).map_err(|failure| {
            debug!(kind = %failure.kind, detail = %failure.detail, "token failed verification");
            TokenError::Invalid(failure)
        })?;

        let now = unix_seconds(now).map_err(|e| TokenError::Clock(e.to_string()))?;
        let expired = is_expired(&claims, now);
        Ok((claims, expired))
    }
}
