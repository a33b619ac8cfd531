//! Compact signed token codec.
//!
//! Tokens are three base64url segments (header, payload, signature) signed
//! with HMAC over header and payload. `verify_and_decode` is the only path
//! that may feed an authorization decision; `decode_unverified` exists for
//! diagnostics.

use std::fmt;

use jsonwebtoken::dangerous::insecure_decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::{missing_claim, KiloClaims};
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailureKind {
    /// Not three segments, or a segment/payload that does not decode
    Malformed,
    /// Signature does not match the configured secret
    BadSignature,
    /// Payload decoded but lacks a required claim
    MissingRequiredClaim,
}

impl fmt::Display for DecodeFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Malformed => "malformed",
            Self::BadSignature => "bad_signature",
            Self::MissingRequiredClaim => "missing_required_claim",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct DecodeFailure {
    pub kind: DecodeFailureKind,
    pub detail: String,
}

impl DecodeFailure {
    pub fn new(kind: DecodeFailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    fn malformed(detail: impl Into<String>) -> Self {
        Self::new(DecodeFailureKind::Malformed, detail)
    }
}

#[derive(Debug, Error)]
#[error("failed to sign token: {0}")]
pub struct SignFailure(String);

/// Serialize and sign `claims` with the configured secret.
pub fn sign(claims: &KiloClaims, security: &SecurityConfig) -> Result<String, SignFailure> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| SignFailure(e.to_string()))
}

/// Verify the signature of `token` and decode its claims.
///
/// Expiry is deliberately not checked here; see [`crate::auth::claims::is_expired`].
/// The HMAC comparison is performed by the `hmac` crate's constant-time verifier.
pub fn verify_and_decode(
    token: &str,
    security: &SecurityConfig,
) -> Result<KiloClaims, DecodeFailure> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.required_spec_claims.clear();

    let claims = decode::<KiloClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            DecodeFailure::new(DecodeFailureKind::BadSignature, e.to_string())
        }
        _ => DecodeFailure::malformed(e.to_string()),
    })?;

    require_structure(claims)
}

/// Decode the payload segment without checking the signature.
///
/// Never use the result to grant access.
pub fn decode_unverified(token: &str) -> Result<KiloClaims, DecodeFailure> {
    let claims = insecure_decode::<KiloClaims>(token)
        .map(|data| data.claims)
        .map_err(|e| DecodeFailure::malformed(e.to_string()))?;

    require_structure(claims)
}

fn require_structure(claims: KiloClaims) -> Result<KiloClaims, DecodeFailure> {
    match missing_claim(&claims) {
        Some(name) => Err(DecodeFailure::new(
            DecodeFailureKind::MissingRequiredClaim,
            format!("missing required claim '{name}'"),
        )),
        None => Ok(claims),
    }
}
