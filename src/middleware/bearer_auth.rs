/*
 * Responsibility
 * - Authorization ヘッダから Bearer トークンを取り出す (ヘッダ抽出のみ)
 * - 検証は services::auth::TokenVerifier の責務
 */
use axum::http::{HeaderMap, header};

/// Extract the raw credential from `Authorization: Bearer <token>`.
///
/// Returns `None` when the header is missing, not valid ASCII, uses another
/// scheme, or carries a blank token. The scheme is matched case-insensitively.
pub fn bearer_credential(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
