use std::sync::Arc;

use futures_util::future::try_join_all;
use futures_util::try_join;

use crate::domain::comment::entity::{CommentDetail, CommentDetailPayload, CommentRow};
use crate::domain::comment::like::CommentLikeRepository;
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;
use crate::domain::reply::entity::{ReplyDetail, ReplyDetailPayload};
use crate::domain::reply::repository::ReplyRepository;
use crate::domain::thread::entity::{ThreadDetail, ThreadDetailPayload};
use crate::domain::thread::repository::ThreadRepository;

/// Assembles one thread's full detail tree: the thread row, its comments in
/// creation order, and per comment the replies and like count.
pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    comment_like_repository: Arc<dyn CommentLikeRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        comment_like_repository: Arc<dyn CommentLikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            comment_like_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, DomainError> {
        self.thread_repository
            .verify_thread_availability(thread_id)
            .await?;
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;

        let comment_rows = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        // Enrichments run concurrently but the result keeps the row order;
        // one failure fails the whole read, never a partial tree.
        let comments = try_join_all(
            comment_rows
                .into_iter()
                .map(|row| self.enrich_comment(row)),
        )
        .await?;

        let mut payload = ThreadDetailPayload::from_row(thread);
        payload.comments = comments;
        ThreadDetail::new(payload)
    }

    async fn enrich_comment(&self, row: CommentRow) -> Result<CommentDetail, DomainError> {
        let (reply_rows, like_count) = try_join!(
            self.reply_repository.get_replies_by_comment_id(&row.id),
            self.comment_like_repository
                .get_like_count_by_comment_id(&row.id),
        )?;

        let replies = reply_rows
            .into_iter()
            .map(|reply| ReplyDetail::new(ReplyDetailPayload::from_row(reply)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut payload = CommentDetailPayload::from_row(row);
        payload.replies = replies;
        payload.like_count = like_count;
        CommentDetail::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::entity::DELETED_COMMENT_CONTENT;
    use crate::domain::comment::like::MockCommentLikeRepository;
    use crate::domain::comment::repository::MockCommentRepository;
    use crate::domain::reply::entity::ReplyRow;
    use crate::domain::reply::repository::MockReplyRepository;
    use crate::domain::thread::entity::ThreadRow;
    use crate::domain::thread::repository::MockThreadRepository;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::eq;

    fn date(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, second).unwrap()
    }

    fn thread_row() -> ThreadRow {
        ThreadRow {
            id: "thread-123".to_owned(),
            title: "sebuah thread".to_owned(),
            body: "sebuah body thread".to_owned(),
            date: date(0),
            username: "dicoding".to_owned(),
        }
    }

    fn comment_row(id: &str, second: u32, is_delete: bool) -> CommentRow {
        CommentRow {
            id: id.to_owned(),
            username: "johndoe".to_owned(),
            date: date(second),
            content: "sebuah comment".to_owned(),
            is_delete,
        }
    }

    #[tokio::test]
    async fn assembles_the_full_tree_in_comment_creation_order() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| Ok(thread_row()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .with(eq("thread-123"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    comment_row("comment-1", 10, false),
                    comment_row("comment-2", 20, false),
                ])
            });

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_get_replies_by_comment_id()
            .times(2)
            .returning(|comment_id| {
                if comment_id == "comment-1" {
                    Ok(vec![ReplyRow {
                        id: "reply-1".to_owned(),
                        username: "dicoding".to_owned(),
                        date: date(15),
                        content: "sebuah balasan".to_owned(),
                        is_delete: false,
                    }])
                } else {
                    Ok(Vec::new())
                }
            });

        let mut comment_like_repository = MockCommentLikeRepository::new();
        comment_like_repository
            .expect_get_like_count_by_comment_id()
            .times(2)
            .returning(|comment_id| Ok(if comment_id == "comment-1" { 2 } else { 0 }));

        let use_case = GetThreadDetailUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
            Arc::new(comment_like_repository),
        );

        let detail = use_case.execute("thread-123").await.unwrap();

        assert_eq!(detail.id, "thread-123");
        assert_eq!(detail.username, "dicoding");
        assert_eq!(detail.date, "2021-08-08T07:19:00.000Z");
        assert_eq!(detail.comments.len(), 2);

        let first = &detail.comments[0];
        assert_eq!(first.id, "comment-1");
        assert_eq!(first.like_count, 2);
        assert_eq!(first.replies.len(), 1);
        assert_eq!(first.replies[0].content, "sebuah balasan");

        let second = &detail.comments[1];
        assert_eq!(second.id, "comment-2");
        assert_eq!(second.like_count, 0);
        assert!(second.replies.is_empty());
    }

    #[tokio::test]
    async fn soft_deleted_comments_come_back_masked() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .times(1)
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .times(1)
            .returning(|_| Ok(thread_row()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(|_| Ok(vec![comment_row("comment-1", 10, true)]));

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_get_replies_by_comment_id()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut comment_like_repository = MockCommentLikeRepository::new();
        comment_like_repository
            .expect_get_like_count_by_comment_id()
            .times(1)
            .returning(|_| Ok(0));

        let use_case = GetThreadDetailUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
            Arc::new(comment_like_repository),
        );

        let detail = use_case.execute("thread-123").await.unwrap();
        assert_eq!(detail.comments[0].content, DELETED_COMMENT_CONTENT);
    }

    #[tokio::test]
    async fn missing_thread_short_circuits_all_further_reads() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .times(1)
            .returning(|_| Err(DomainError::NotFound("thread tidak ditemukan".into())));
        thread_repository.expect_get_thread_by_id().times(0);

        let mut comment_repository = MockCommentRepository::new();
        comment_repository.expect_get_comments_by_thread_id().times(0);

        let use_case = GetThreadDetailUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(MockReplyRepository::new()),
            Arc::new(MockCommentLikeRepository::new()),
        );

        let err = use_case.execute("thread-404").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn one_failing_enrichment_fails_the_whole_read() {
        let mut thread_repository = MockThreadRepository::new();
        thread_repository
            .expect_verify_thread_availability()
            .times(1)
            .returning(|_| Ok(()));
        thread_repository
            .expect_get_thread_by_id()
            .times(1)
            .returning(|_| Ok(thread_row()));

        let mut comment_repository = MockCommentRepository::new();
        comment_repository
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    comment_row("comment-1", 10, false),
                    comment_row("comment-2", 20, false),
                ])
            });

        let mut reply_repository = MockReplyRepository::new();
        reply_repository
            .expect_get_replies_by_comment_id()
            .returning(|comment_id| {
                if comment_id == "comment-2" {
                    Err(DomainError::Infrastructure("connection reset".into()))
                } else {
                    Ok(Vec::new())
                }
            });

        let mut comment_like_repository = MockCommentLikeRepository::new();
        comment_like_repository
            .expect_get_like_count_by_comment_id()
            .returning(|_| Ok(0));

        let use_case = GetThreadDetailUseCase::new(
            Arc::new(thread_repository),
            Arc::new(comment_repository),
            Arc::new(reply_repository),
            Arc::new(comment_like_repository),
        );

        let err = use_case.execute("thread-123").await.unwrap_err();
        assert!(matches!(err, DomainError::Infrastructure(_)));
    }
}
