use super::security_config::SecurityConfig;
use crate::auth::ttl::TokenTtl;
use crate::services::tokens::TokenService;

/// Defaults applied when issuing or refreshing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDefaults {
    /// Environment stamped on tokens when the caller gives none
    pub environment: String,
    pub ttl: TokenTtl,
}

impl Default for TokenDefaults {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            ttl: TokenTtl::DEFAULT,
        }
    }
}

/// Application state shared by every worker. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signing configuration
    pub security: SecurityConfig,
    pub token_defaults: TokenDefaults,
}

impl AppState {
    pub fn new(security: SecurityConfig, token_defaults: TokenDefaults) -> Self {
        Self {
            security,
            token_defaults,
        }
    }

    /// Token lifecycle operations bound to this state's configuration.
    pub fn tokens(&self) -> TokenService<'_> {
        TokenService::new(&self.security, &self.token_defaults)
    }
}
