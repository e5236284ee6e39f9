/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor (必須)
 * - OptionalAuthCtx (任意)
 */

mod core;
mod types;

pub use self::core::{AuthCtxExtractor, OptionalAuthCtx};
pub use types::AuthCtx;
