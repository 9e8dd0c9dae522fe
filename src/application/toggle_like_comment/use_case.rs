use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::like::CommentLikeRepository;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::thread::repository::ThreadRepository;
use crate::domain::validation::{field, is_present};

/// Toggles one user's like on one comment.
///
/// The effect is defined purely by the existence state at check time: an
/// existing like is removed, a missing one is added. The check/mutate pair is
/// not guarded against a concurrent double toggle; the storage uniqueness
/// constraint on (comment, user) resolves that race and a conflicting insert
/// is benign.
pub struct ToggleLikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    comment_like_repository: Arc<dyn CommentLikeRepository>,
}

impl ToggleLikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        comment_like_repository: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            comment_like_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> Result<(), DomainError> {
        let (thread_id, comment_id, user_id) = Self::validate_payload(payload)?;

        self.thread_repository
            .verify_thread_availability(&thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(&comment_id)
            .await?;

        let is_liked = self
            .comment_like_repository
            .check_like_exists(&comment_id, &user_id)
            .await?;

        if is_liked {
            self.comment_like_repository
                .delete_like(&comment_id, &user_id)
                .await
        } else {
            self.comment_like_repository
                .add_like(&comment_id, &user_id)
                .await
        }
    }

    fn validate_payload(payload: &Value) -> Result<(String, String, String), DomainError> {
        let thread_id = field(payload, "threadId");
        let comment_id = field(payload, "commentId");
        let user_id = field(payload, "userId");

        if [thread_id, comment_id, user_id]
            .iter()
            .any(|value| !is_present(value))
        {
            return Err(DomainError::Validation(
                "TOGGLE_LIKE_COMMENT_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY".into(),
            ));
        }

        match (thread_id.as_str(), comment_id.as_str(), user_id.as_str()) {
            (Some(thread_id), Some(comment_id), Some(user_id)) => Ok((
                thread_id.to_owned(),
                comment_id.to_owned(),
                user_id.to_owned(),
            )),
            _ => Err(DomainError::Validation(
                "TOGGLE_LIKE_COMMENT_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION".into(),
            )),
        }
    }
}
