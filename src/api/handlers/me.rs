/*
 * Responsibility
 * - GET /me (認証必須)
 * - トークンの user_id をそのまま返す (ユーザーテーブルは持たない)
 */
use axum::Json;

use crate::api::{dto::me::MeResponse, extractors::AuthCtxExtractor};

pub async fn me(AuthCtxExtractor(auth): AuthCtxExtractor) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: auth.user_id.into_string(),
    })
}
