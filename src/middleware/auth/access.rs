//! access token (HS256 JWT) 検証 → AuthCtx を extensions に入れる
//!
//! - `require`: 検証失敗はそのまま応答 (401 / 500) にする
//! - `optional`: 検証失敗は未認証扱い。AuthCtx を入れずに handler へ進む
//!
//! Header parsing lives in `middleware::bearer_auth`; verification itself is
//! `TokenVerifier`'s job. This layer only wires the two together.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::bearer_auth::bearer_credential;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// 認証必須の route 群に middleware を適用する。
///
/// `route_layer` なので、マッチしないパスは 401 ではなく 404 のまま。
pub fn require(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, require_middleware))
}

/// 認証任意の route 群に middleware を適用する。
pub fn optional(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, optional_middleware))
}

async fn require_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credential = bearer_credential(req.headers());

    let subject = match state.verifier.require_subject(credential) {
        Ok(subject) => subject,
        Err(err) => {
            match &err {
                AuthError::Configuration => {
                    tracing::error!(error = %err, "cannot verify access token")
                }
                AuthError::MissingCredential => {
                    tracing::debug!(error = %err, "request without bearer credential")
                }
                AuthError::InvalidToken(_) | AuthError::Expired => {
                    tracing::warn!(error = %err, "access token verification failed")
                }
            }
            return Err(err.into());
        }
    };

    tracing::debug!(user_id = subject.as_str(), "access token verified");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(subject));

    Ok(next.run(req).await)
}

async fn optional_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let credential = bearer_credential(req.headers());

    if let Some(subject) = state.verifier.optional_subject(credential) {
        req.extensions_mut().insert(AuthCtx::new(subject));
    }

    next.run(req).await
}
