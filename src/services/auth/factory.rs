/// Factory: build `TokenVerifier` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenVerifier;

pub fn build_token_verifier(config: &Config) -> Arc<TokenVerifier> {
    let verifier = TokenVerifier::hs256(config.jwt_secret.clone(), config.token_leeway_seconds);

    if !verifier.is_configured() {
        tracing::warn!("JWT_SECRET is not set; protected routes will answer 500");
    }

    Arc::new(verifier)
}
