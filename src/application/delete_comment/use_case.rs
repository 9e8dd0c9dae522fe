use std::sync::Arc;

use super::dto::DeleteCommentRequest;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::thread::repository::ThreadRepository;

/// Pure orchestration over the ports: existence, then ownership, then the
/// soft delete. Each step short-circuits on failure and no entity object is
/// constructed.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, request: &DeleteCommentRequest) -> Result<(), DomainError> {
        self.thread_repository
            .verify_thread_availability(&request.thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&request.comment_id)
            .await?;
        self.comment_repository
            .verify_comment_owner(&request.comment_id, &request.owner)
            .await?;
        self.comment_repository
            .delete_comment_by_id(&request.comment_id)
            .await
    }
}
