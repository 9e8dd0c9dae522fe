use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::like::CommentLikeRepository;
use crate::domain::errors::DomainError;

pub struct SqlxCommentLikeRepository {
    pub pool: PgPool,
}

impl SqlxCommentLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for SqlxCommentLikeRepository {
    async fn check_like_exists(
        &self,
        comment_id: &str,
        user_id: &str,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND owner = $2)",
        )
        .bind(comment_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }

    async fn add_like(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError> {
        let id = format!("like-{}", Uuid::now_v7());

        // Two concurrent toggles can both observe "not liked" and race here;
        // the unique (comment_id, owner) constraint resolves that and the
        // losing insert is a benign no-op.
        sqlx::query(
            "INSERT INTO comment_likes (id, comment_id, owner) VALUES ($1, $2, $3)
             ON CONFLICT (comment_id, owner) DO NOTHING",
        )
        .bind(&id)
        .bind(comment_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        Ok(())
    }

    async fn delete_like(&self, comment_id: &str, user_id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        Ok(())
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1",
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}
