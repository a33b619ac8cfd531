use jsonwebtoken::Algorithm;

/// Secret used outside production when `JWT_SECRET` is not provided.
pub const DEVELOPMENT_FALLBACK_SECRET: &str = "fallback_secret_key_for_development";

/// Signing configuration, loaded once at startup and never mutated.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared HMAC secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Token algorithm (pinned to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
