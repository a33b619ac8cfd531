pub mod claims;
pub mod clock;
pub mod codec;
pub mod gate;
pub mod ttl;

pub use claims::{IdentityContext, KiloClaims, CURRENT_SCHEMA_VERSION};
pub use codec::{DecodeFailure, DecodeFailureKind};
pub use gate::{AuthGate, Decision};
pub use ttl::TokenTtl;
