pub mod app_state;
pub mod builder;
pub mod security_config;

pub use app_state::{AppState, TokenDefaults};
pub use builder::{build_state, StateBuilder};
pub use security_config::SecurityConfig;
