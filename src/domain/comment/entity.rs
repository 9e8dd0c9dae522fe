use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::reply::entity::ReplyDetail;
use crate::domain::validation::{DateField, field, require_strings};

/// Fixed literal shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Creation-intent payload for a comment on a thread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl AddComment {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [content, thread_id, owner] = require_strings(
            "COMMENT_CREATION_VALIDATION",
            [
                field(payload, "content"),
                field(payload, "threadId"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self {
            content,
            thread_id,
            owner,
        })
    }
}

/// Persistence result returned after a comment row has been written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [id, content, owner] = require_strings(
            "COMMENT_OUTPUT_VALIDATION",
            [
                field(payload, "id"),
                field(payload, "content"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self { id, content, owner })
    }
}

/// Comment row as the storage adapter returns it. Soft-deleted rows are
/// included; masking happens when the detail object is built.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// Loosely-typed input for [`CommentDetail`]. The deletion flag is consumed
/// at construction and never stored on the detail object.
#[derive(Debug, Default)]
pub struct CommentDetailPayload {
    pub id: Value,
    pub username: Value,
    pub date: DateField,
    pub content: Value,
    pub is_delete: bool,
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

impl CommentDetailPayload {
    pub fn from_row(row: CommentRow) -> Self {
        Self {
            id: Value::String(row.id),
            username: Value::String(row.username),
            date: DateField::Timestamp(row.date),
            content: Value::String(row.content),
            is_delete: row.is_delete,
            ..Self::default()
        }
    }
}

/// Nested read-model for one comment, enriched with its replies and like
/// count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
    pub like_count: i64,
}

impl CommentDetail {
    pub fn new(payload: CommentDetailPayload) -> Result<Self, DomainError> {
        let date = payload.date.normalize();
        // Validation sees the raw content; masking replaces it afterwards and
        // the original is discarded.
        let [id, username, date, content] = require_strings(
            "COMMENT_DETAIL_VALIDATION",
            [&payload.id, &payload.username, &date, &payload.content],
        )?;

        let content = if payload.is_delete {
            DELETED_COMMENT_CONTENT.to_owned()
        } else {
            content
        };

        Ok(Self {
            id,
            username,
            date,
            content,
            replies: payload.replies,
            like_count: payload.like_count,
        })
    }
}
