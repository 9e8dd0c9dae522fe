use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::entity::{AddReply, AddedReply};
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::thread::repository::ThreadRepository;

pub struct AddReplyUseCase {
    reply_repository: Arc<dyn ReplyRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        reply_repository: Arc<dyn ReplyRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            reply_repository,
            comment_repository,
            thread_repository,
        }
    }

    /// Both parents must exist, thread first, before the payload is
    /// validated and persisted.
    pub async fn execute(&self, payload: &Value) -> Result<AddedReply, DomainError> {
        let thread_id = payload
            .get("threadId")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let comment_id = payload
            .get("commentId")
            .and_then(Value::as_str)
            .unwrap_or_default();

        self.thread_repository
            .verify_thread_availability(thread_id)
            .await?;
        self.comment_repository
            .verify_comment_availability(comment_id)
            .await?;

        let new_reply = AddReply::new(payload)?;
        self.reply_repository.add_reply(&new_reply).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::repository::MockCommentRepository;
    use crate::domain::reply::repository::MockReplyRepository;
    use crate::domain::thread::repository::MockThreadRepository;
    use mockall::Sequence;
    use mockall::predicate::eq;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "content": "sebuah balasan",
            "threadId": "thread-123",
            "commentId": "comment-123",
            "owner": "user-123",
        })
    }

    #[tokio::test]
    async fn verifies_thread_then_comment_before_persisting() {
        let mut seq = Sequence::new();

        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .with(eq("thread-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_verify_comment_availability()
            .with(eq("comment-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_add_reply()
            .withf(|new_reply| {
                new_reply.content == "sebuah balasan"
                    && new_reply.comment_id == "comment-123"
                    && new_reply.owner == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_reply| {
                Ok(AddedReply {
                    id: "reply-123".to_owned(),
                    content: new_reply.content.clone(),
                    owner: new_reply.owner.clone(),
                })
            });

        let use_case = AddReplyUseCase::new(
            Arc::new(reply_repository),
            Arc::new(comment_repository),
            Arc::new(thread_repository),
        );
        let added = use_case.execute(&payload()).await.unwrap();

        assert_eq!(added.id, "reply-123");
        assert_eq!(added.content, "sebuah balasan");
    }

    #[tokio::test]
    async fn missing_comment_short_circuits_the_chain() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .times(1)
            .returning(|_| Ok(()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_verify_comment_availability()
            .times(1)
            .returning(|_| Err(DomainError::NotFound("komentar tidak ditemukan".into())));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository.expect_add_reply().times(0);

        let use_case = AddReplyUseCase::new(
            Arc::new(reply_repository),
            Arc::new(comment_repository),
            Arc::new(thread_repository),
        );
        let err = use_case.execute(&payload()).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
