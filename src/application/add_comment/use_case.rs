use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::entity::{AddComment, AddedComment};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::thread::repository::ThreadRepository;

pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    /// The parent thread must exist before the payload is validated and
    /// persisted.
    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, DomainError> {
        let thread_id = payload
            .get("threadId")
            .and_then(Value::as_str)
            .unwrap_or_default();
        self.thread_repository
            .verify_thread_availability(thread_id)
            .await?;

        let new_comment = AddComment::new(payload)?;
        self.comment_repository.add_comment(&new_comment).await
    }
}
