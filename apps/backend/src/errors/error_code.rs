//! Error codes for the Kilo auth backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and travel in the `x-error-code`
//! response header.

use core::fmt;

/// Centralized error codes for the Kilo auth backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authorization header missing or not a Bearer credential
    UnauthorizedMissingBearer,
    /// Token failed structural decoding, signature or claim checks
    UnauthorizedInvalidToken,
    /// Token is past its expiry
    UnauthorizedExpiredToken,

    // Token lifecycle requests
    /// Request body carried no token
    TokenRequired,
    /// Refresh attempted on a token that is still live
    TokenNotExpired,

    // Request validation
    /// General bad request error
    BadRequest,
    /// Request body was not valid JSON
    InvalidJson,

    // System errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::UnauthorizedExpiredToken => "UNAUTHORIZED_EXPIRED_TOKEN",

            Self::TokenRequired => "TOKEN_REQUIRED",
            Self::TokenNotExpired => "TOKEN_NOT_EXPIRED",

            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
