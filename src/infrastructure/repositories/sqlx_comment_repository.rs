use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::entity::{AddComment, AddedComment, CommentRow};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::errors::DomainError;

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(&self, new_comment: &AddComment) -> Result<AddedComment, DomainError> {
        let id = format!("comment-{}", Uuid::now_v7());

        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO comments (id, thread_id, content, owner) VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_comment.thread_id)
        .bind(&new_comment.content)
        .bind(&new_comment.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        AddedComment::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    async fn verify_comment_availability(&self, comment_id: &str) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)",
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        if !exists {
            return Err(DomainError::NotFound("komentar tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        let stored_owner =
            sqlx::query_scalar::<_, String>("SELECT owner FROM comments WHERE id = $1")
                .bind(comment_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?
                .ok_or_else(|| DomainError::NotFound("komentar tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(DomainError::Authorization(
                "Anda tidak berhak mengakses resource ini".into(),
            ));
        }
        Ok(())
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        tracing::debug!(comment_id = %comment_id, "comment soft-deleted");
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRow>, DomainError> {
        sqlx::query_as::<_, CommentRow>(
            "SELECT comments.id, users.username, comments.date, comments.content,
                    comments.is_delete
             FROM comments
             LEFT JOIN users ON comments.owner = users.id
             WHERE comments.thread_id = $1
             ORDER BY comments.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}
