use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    // 認証済みの場合のみ出力
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
