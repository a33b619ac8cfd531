//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! initialization, error-body assertions and unique test identifiers.

pub mod error_body;
pub mod test_logging;
pub mod unique_helpers;
