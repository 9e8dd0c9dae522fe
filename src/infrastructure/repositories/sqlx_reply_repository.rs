use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::reply::entity::{AddReply, AddedReply, ReplyRow};
use crate::domain::reply::repository::ReplyRepository;

pub struct SqlxReplyRepository {
    pub pool: PgPool,
}

impl SqlxReplyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for SqlxReplyRepository {
    async fn add_reply(&self, new_reply: &AddReply) -> Result<AddedReply, DomainError> {
        let id = format!("reply-{}", Uuid::now_v7());

        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO replies (id, comment_id, content, owner) VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_reply.comment_id)
        .bind(&new_reply.content)
        .bind(&new_reply.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        AddedReply::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1)",
        )
        .bind(reply_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        if !exists {
            return Err(DomainError::NotFound("balasan tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), DomainError> {
        let stored_owner =
            sqlx::query_scalar::<_, String>("SELECT owner FROM replies WHERE id = $1")
                .bind(reply_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Infrastructure(e.to_string()))?
                .ok_or_else(|| DomainError::NotFound("balasan tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(DomainError::Authorization(
                "Anda tidak berhak mengakses resource ini".into(),
            ));
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        tracing::debug!(reply_id = %reply_id, "reply soft-deleted");
        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRow>, DomainError> {
        sqlx::query_as::<_, ReplyRow>(
            "SELECT replies.id, users.username, replies.date, replies.content,
                    replies.is_delete
             FROM replies
             LEFT JOIN users ON replies.owner = users.id
             WHERE replies.comment_id = $1
             ORDER BY replies.date ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}
