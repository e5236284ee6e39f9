/*
 * Responsibility
 * - ドメインサービス (認証など) の公開インターフェース
 */
pub mod auth;
