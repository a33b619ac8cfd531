//! Kilo token claims and the policy checks applied after signature verification.

use serde::{Deserialize, Serialize};

/// Claims-shape revision stamped on every token this service issues.
pub const CURRENT_SCHEMA_VERSION: i64 = 3;

/// Payload carried inside a Kilo token.
///
/// The identifying fields default to their empty value when absent from the
/// wire so that a missing claim surfaces as a structural failure rather than a
/// JSON error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KiloClaims {
    /// Deployment context, e.g. `production` or `staging`
    #[serde(rename = "environment", alias = "env", default)]
    pub environment: String,
    #[serde(rename = "kiloUserId", default)]
    pub subject_id: String,
    /// Carried for compatibility with API-token payloads; never enforced.
    #[serde(rename = "apiTokenPepper", default)]
    pub api_token_pepper: Option<String>,
    #[serde(rename = "version", default)]
    pub schema_version: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl KiloClaims {
    /// Build claims for a new token valid from `iat` until `exp`.
    pub fn new(subject_id: &str, environment: &str, iat: i64, exp: i64) -> Self {
        Self {
            environment: environment.to_string(),
            subject_id: subject_id.to_string(),
            api_token_pepper: None,
            schema_version: CURRENT_SCHEMA_VERSION,
            iat,
            exp,
        }
    }

    pub fn identity(&self) -> IdentityContext {
        IdentityContext {
            subject_id: self.subject_id.clone(),
            environment: self.environment.clone(),
        }
    }
}

/// Authenticated identity propagated to downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityContext {
    #[serde(rename = "kiloUserId")]
    pub subject_id: String,
    #[serde(rename = "env")]
    pub environment: String,
}

/// True iff the environment, subject and schema version claims are all set.
pub fn is_structurally_valid(claims: &KiloClaims) -> bool {
    !claims.environment.is_empty() && !claims.subject_id.is_empty() && claims.schema_version != 0
}

/// True iff `exp` lies strictly before `now`. A token expiring at `now` is still live.
pub fn is_expired(claims: &KiloClaims, now: i64) -> bool {
    claims.exp < now
}

/// Names the first required claim that is missing, if any.
pub fn missing_claim(claims: &KiloClaims) -> Option<&'static str> {
    if claims.environment.is_empty() {
        Some("environment")
    } else if claims.subject_id.is_empty() {
        Some("kiloUserId")
    } else if claims.schema_version == 0 {
        Some("version")
    } else {
        None
    }
}
