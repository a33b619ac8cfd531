//! Token time-to-live values such as `7d`, `1h` or `-1s`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use time::Duration;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TtlParseError {
    #[error("TTL is empty")]
    Empty,
    #[error("TTL '{0}' must be an integer followed by one of s, m, h, d")]
    Invalid(String),
}

/// Lifetime granted to an issued token. May be negative to mint
/// already-expired tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTtl(Duration);

impl TokenTtl {
    pub const DEFAULT: TokenTtl = TokenTtl(Duration::days(7));

    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub const fn seconds(secs: i64) -> Self {
        Self(Duration::seconds(secs))
    }

    pub fn as_seconds(&self) -> i64 {
        self.0.whole_seconds()
    }
}

impl Default for TokenTtl {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for TokenTtl {
    type Err = TtlParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TtlParseError::Empty);
        }

        let (digits, unit) = match s.char_indices().last() {
            Some((idx, c)) if c.is_ascii_alphabetic() => (&s[..idx], c),
            _ => (s, 's'),
        };
        let amount: i64 = digits
            .parse()
            .map_err(|_| TtlParseError::Invalid(s.to_string()))?;

        let unit_seconds: i64 = match unit {
            's' => 1,
            'm' => 60,
            'h' => 60 * 60,
            'd' => 24 * 60 * 60,
            _ => return Err(TtlParseError::Invalid(s.to_string())),
        };
        let secs = amount
            .checked_mul(unit_seconds)
            .ok_or_else(|| TtlParseError::Invalid(s.to_string()))?;
        Ok(Self::seconds(secs))
    }
}

impl fmt::Display for TokenTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_seconds())
    }
}
