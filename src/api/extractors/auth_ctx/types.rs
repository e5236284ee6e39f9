/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 */

use crate::services::auth::Subject;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` はフロントエンドが発行したトークンの `user_id` claim (検証済み、空でない)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Subject,
}

impl AuthCtx {
    pub fn new(user_id: Subject) -> Self {
        Self { user_id }
    }
}
