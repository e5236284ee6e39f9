/*
 * Responsibility
 * - GET / (疎通 + 任意認証)
 * - 有効なトークンがあれば user_id を返す。無効/無しでも 200
 */
use axum::Json;

use crate::api::{dto::index::IndexResponse, extractors::OptionalAuthCtx};

pub async fn index(OptionalAuthCtx(auth): OptionalAuthCtx) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Roadmap API is alive!",
        user_id: auth.map(|ctx| ctx.user_id.into_string()),
    })
}
