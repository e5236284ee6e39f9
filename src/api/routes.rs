/*
 * Responsibility
 * - URL 構造を定義
 * - public (/health, /tracks) / optional (/) / protected (/me) を merge
 * - 認証の掛け方 (必須 or 任意) は route_layer でここで決める
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, index::index, me::me, tracks::list_tracks};
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health))
        .route("/tracks", get(list_tracks));

    let optional = access::optional(Router::new().route("/", get(index)), state.clone());

    let protected = access::require(Router::new().route("/me", get(me)), state);

    public.merge(optional).merge(protected)
}
