use serde::Deserialize;

/// Deletion request assembled by the transport layer from the route
/// parameters and the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCommentRequest {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}
