use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Storage port for comment likes.
///
/// A like is pure relation state: at most one row per (comment, user) pair,
/// guaranteed by a storage uniqueness constraint. There is no value object
/// for it, only existence facts and a count projection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    async fn check_like_exists(&self, comment_id: &str, user_id: &str)
    -> Result<bool, DomainError>;

    async fn add_like(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError>;

    async fn delete_like(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError>;

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<i64, DomainError>;
}
