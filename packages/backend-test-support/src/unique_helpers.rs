//! Unique identifiers for test isolation.

use ulid::Ulid;

/// A unique string `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// assert_ne!(a, unique_str("user"));
/// assert!(a.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique Kilo subject id.
pub fn unique_subject() -> String {
    unique_str("kilo-user")
}
