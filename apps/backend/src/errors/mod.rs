//! Error handling for the Kilo auth backend.

pub mod error_code;

pub use error_code::ErrorCode;
