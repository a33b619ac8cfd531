use crate::auth::ttl::TokenTtl;
use crate::config::app::Config;
use crate::state::app_state::{AppState, TokenDefaults};
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    token_defaults: TokenDefaults,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            token_defaults: TokenDefaults::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
            .with_token_defaults(TokenDefaults {
                environment: config.default_token_env.clone(),
                ttl: config.token_ttl,
            })
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_token_defaults(mut self, token_defaults: TokenDefaults) -> Self {
        self.token_defaults = token_defaults;
        self
    }

    pub fn with_ttl(mut self, ttl: TokenTtl) -> Self {
        self.token_defaults.ttl = ttl;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.security_config, self.token_defaults)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
