pub mod identity;
pub mod validated_json;

pub use identity::Identity;
pub use validated_json::ValidatedJson;
