use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteReplyRequest {
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}
