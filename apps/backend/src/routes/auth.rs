use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::tokens::{RefreshedToken, ValidatedToken};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub token: Option<Value>,
}

impl TokenRequest {
    /// The submitted token string. Absent, `null`, `false`, `0` and `""` count
    /// as no token; any other non-string value can never verify.
    pub fn token(&self) -> Result<Option<&str>, AppError> {
        match &self.token {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(AppError::InvalidToken),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponse {
    pub valid: bool,
    pub kilo_user_id: String,
    pub env: String,
    pub version: i64,
    pub iat: i64,
    pub exp: i64,
}

impl From<ValidatedToken> for ValidateTokenResponse {
    fn from(v: ValidatedToken) -> Self {
        Self {
            valid: true,
            kilo_user_id: v.subject_id,
            env: v.environment,
            version: v.schema_version,
            iat: v.issued_at,
            exp: v.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub token: String,
    pub kilo_user_id: String,
    pub env: String,
}

impl From<RefreshedToken> for RefreshTokenResponse {
    fn from(r: RefreshedToken) -> Self {
        Self {
            token: r.token,
            kilo_user_id: r.subject_id,
            env: r.environment,
        }
    }
}

/// Report the claims of a live, correctly signed token.
async fn validate_token(
    body: ValidatedJson<TokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let validated = app_state.tokens().validate(body.token()?)?;
    Ok(HttpResponse::Ok().json(ValidateTokenResponse::from(validated)))
}

/// Exchange an expired, correctly signed token for a fresh one.
async fn refresh_token(
    body: ValidatedJson<TokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let refreshed = app_state.tokens().refresh(body.token()?)?;
    Ok(HttpResponse::Ok().json(RefreshTokenResponse::from(refreshed)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/validate-token").route(web::post().to(validate_token)))
        .service(web::resource("/refresh-token").route(web::post().to(refresh_token)));
}
