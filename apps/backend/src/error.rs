use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::codec::DecodeFailure;
use crate::errors::ErrorCode;
use crate::services::tokens::TokenError;
use crate::trace_ctx;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Bearer token not found.")]
    MissingBearer,
    #[error("Invalid token.")]
    InvalidToken,
    #[error("Token expired.")]
    ExpiredToken,
    #[error("Token is required.")]
    MissingToken,
    #[error("Token is not expired yet.")]
    TokenNotExpired,
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::InvalidToken => ErrorCode::UnauthorizedInvalidToken,
            AppError::ExpiredToken => ErrorCode::UnauthorizedExpiredToken,
            AppError::MissingToken => ErrorCode::TokenRequired,
            AppError::TokenNotExpired => ErrorCode::TokenNotExpired,
            AppError::BadRequest { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-facing title placed in the `error` field.
    pub fn title(&self) -> &'static str {
        match self.status() {
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::BAD_REQUEST => "Bad Request",
            _ => "Internal Server Error",
        }
    }

    /// Message returned to the caller. Server-side detail never leaves the process.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Internal { .. } | AppError::Config { .. } => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingBearer | AppError::InvalidToken | AppError::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::MissingToken | AppError::TokenNotExpired | AppError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.title(),
            message: self.message(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DecodeFailure> for AppError {
    fn from(_: DecodeFailure) -> Self {
        AppError::InvalidToken
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::MissingToken => AppError::MissingToken,
            TokenError::Invalid(_) => AppError::InvalidToken,
            TokenError::Expired => AppError::ExpiredToken,
            TokenError::NotYetExpired => AppError::TokenNotExpired,
            TokenError::EmptyClaim(name) => {
                AppError::bad_request(ErrorCode::BadRequest, format!("{name} must not be empty."))
            }
            TokenError::ExpiryOverflow(secs) => {
                AppError::internal(format!("token lifetime of {secs}s overflows the expiry timestamp"))
            }
            TokenError::Clock(detail) | TokenError::Signing(detail) => AppError::internal(detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, error = %self, "request failed with internal error");
        }

        let mut builder = HttpResponse::build(status);
        builder
            .insert_header(("x-error-code", self.code().as_str()))
            .insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(self.body())
    }
}
