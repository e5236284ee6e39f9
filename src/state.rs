/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: verifier: TokenVerifier (secret は構築時に注入、以後 immutable)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenVerifier;

#[derive(Clone, Debug)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }
}
