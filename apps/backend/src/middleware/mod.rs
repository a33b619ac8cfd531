pub mod cors;
pub mod kilo_auth;
pub mod request_trace;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use kilo_auth::KiloAuth;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
