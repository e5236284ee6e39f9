pub mod decoder;
pub mod factory;
pub mod secret;
pub mod verifier;

pub use decoder::MAX_LEEWAY_SECONDS;
pub use factory::build_token_verifier;
pub use secret::Secret;
pub use verifier::{AuthError, InvalidTokenReason, Subject, TokenVerifier};
