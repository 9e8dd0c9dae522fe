use std::sync::Arc;

use super::dto::DeleteReplyRequest;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::repository::ReplyRepository;

/// Same precondition chain as comment deletion, scoped to the parent
/// comment: existence, then ownership, then the soft delete.
pub struct DeleteReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, request: &DeleteReplyRequest) -> Result<(), DomainError> {
        self.comment_repository
            .verify_comment_availability(&request.comment_id)
            .await?;
        self.reply_repository
            .verify_reply_availability(&request.reply_id)
            .await?;
        self.reply_repository
            .verify_reply_owner(&request.reply_id, &request.owner)
            .await?;
        self.reply_repository
            .delete_reply_by_id(&request.reply_id)
            .await
    }
}
