//! Application configuration loaded from environment variables.

use std::env;

use tracing::warn;

use crate::auth::ttl::TokenTtl;
use crate::error::AppError;
use crate::state::security_config::DEVELOPMENT_FALLBACK_SECRET;

const LOCAL_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Deployment context the process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Staging,
    Dev,
}

impl RuntimeEnv {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("production") | Some("prod") => RuntimeEnv::Prod,
            Some("staging") => RuntimeEnv::Staging,
            _ => RuntimeEnv::Dev,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    pub runtime_env: RuntimeEnv,

    // Token configuration
    pub jwt_secret: String,
    pub token_ttl: TokenTtl,
    pub default_token_env: String,

    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load and validate all configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let runtime_env = RuntimeEnv::parse(lookup("APP_ENV").as_deref());

        let host = lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port_str = lookup("BACKEND_PORT").unwrap_or_else(|| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if runtime_env == RuntimeEnv::Prod => {
                return Err(AppError::config("JWT_SECRET must be set in production"));
            }
            None => {
                warn!("JWT_SECRET not set; using the development fallback secret");
                DEVELOPMENT_FALLBACK_SECRET.to_string()
            }
        };

        let token_ttl = match lookup("KILO_TOKEN_TTL") {
            Some(raw) => raw
                .parse::<TokenTtl>()
                .map_err(|e| AppError::config(format!("KILO_TOKEN_TTL: {e}")))?,
            None => TokenTtl::DEFAULT,
        };

        let default_token_env = lookup("KILO_DEFAULT_ENV")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "production".to_string());

        let cors_allowed_origins =
            parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref().unwrap_or_default());

        Ok(Config {
            host,
            port,
            runtime_env,
            jwt_secret,
            token_ttl,
            default_token_env,
            cors_allowed_origins,
        })
    }
}

/// Comma-separated origins; empty, `null` and non-http(s) entries are dropped.
/// Falls back to localhost when nothing valid remains.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if origins.is_empty() {
        LOCAL_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
