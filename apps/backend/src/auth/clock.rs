use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("system time is before the unix epoch")]
pub struct ClockError;

/// Whole seconds since the unix epoch.
pub fn unix_seconds(at: SystemTime) -> Result<i64, ClockError> {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| ClockError)
}
