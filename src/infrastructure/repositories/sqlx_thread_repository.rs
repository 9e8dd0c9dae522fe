use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::thread::entity::{AddThread, AddedThread, ThreadRow};
use crate::domain::thread::repository::ThreadRepository;

pub struct SqlxThreadRepository {
    pub pool: PgPool,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn add_thread(&self, new_thread: &AddThread) -> Result<AddedThread, DomainError> {
        let id = format!("thread-{}", Uuid::now_v7());

        let (id, title, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4)
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        tracing::debug!(thread_id = %id, "thread persisted");

        // The persisted row goes back through the output validator so no
        // unchecked shape leaves the adapter.
        AddedThread::new(&json!({ "id": id, "title": title, "owner": owner }))
    }

    async fn verify_thread_availability(&self, thread_id: &str) -> Result<(), DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        if !exists {
            return Err(DomainError::NotFound("thread tidak ditemukan".into()));
        }
        Ok(())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadRow, DomainError> {
        sqlx::query_as::<_, ThreadRow>(
            "SELECT threads.id, threads.title, threads.body, threads.date, users.username
             FROM threads
             LEFT JOIN users ON threads.owner = users.id
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound("thread tidak ditemukan".into()))
    }
}
