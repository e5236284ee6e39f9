/*
 * Responsibility
 * - Router に掛ける middleware 群
 *   - auth::access (require / optional), cors / http / security_headers の apply()
 *   - bearer_auth: Authorization ヘッダの抽出
 */
pub mod auth;
pub mod bearer_auth;
pub mod cors;
pub mod http;
pub mod security_headers;
