#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::{IdentityContext, KiloClaims};
pub use auth::codec::{decode_unverified, sign, verify_and_decode, DecodeFailure, DecodeFailureKind};
pub use auth::gate::{bearer_claims, AuthGate, Decision};
pub use auth::ttl::TokenTtl;
pub use config::app::Config;
pub use error::AppError;
pub use extractors::identity::Identity;
pub use middleware::cors::cors_middleware;
pub use middleware::kilo_auth::KiloAuth;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use services::tokens::{TokenError, TokenService};
pub use state::app_state::{AppState, TokenDefaults};
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
