pub mod tokens;

pub use tokens::{RefreshedToken, TokenError, TokenService, ValidatedToken};
