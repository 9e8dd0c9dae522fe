use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::validation::{DateField, field, require_strings};

/// Fixed literal shown in place of a soft-deleted reply's content.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Creation-intent payload for a reply to a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddReply {
    pub content: String,
    pub comment_id: String,
    pub owner: String,
}

impl AddReply {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [content, comment_id, owner] = require_strings(
            "REPLY_CREATION_VALIDATION",
            [
                field(payload, "content"),
                field(payload, "commentId"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self {
            content,
            comment_id,
            owner,
        })
    }
}

/// Persistence result returned after a reply row has been written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [id, content, owner] = require_strings(
            "REPLY_OUTPUT_VALIDATION",
            [
                field(payload, "id"),
                field(payload, "content"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self { id, content, owner })
    }
}

/// Reply row as the storage adapter returns it, soft-deleted rows included.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReplyRow {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// Loosely-typed input for [`ReplyDetail`].
#[derive(Debug, Default)]
pub struct ReplyDetailPayload {
    pub id: Value,
    pub username: Value,
    pub date: DateField,
    pub content: Value,
    pub is_delete: bool,
}

impl ReplyDetailPayload {
    pub fn from_row(row: ReplyRow) -> Self {
        Self {
            id: Value::String(row.id),
            username: Value::String(row.username),
            date: DateField::Timestamp(row.date),
            content: Value::String(row.content),
            is_delete: row.is_delete,
        }
    }
}

/// Nested read-model for one reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDetail {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

impl ReplyDetail {
    pub fn new(payload: ReplyDetailPayload) -> Result<Self, DomainError> {
        let date = payload.date.normalize();
        let [id, username, date, content] = require_strings(
            "REPLY_DETAIL_VALIDATION",
            [&payload.id, &payload.username, &date, &payload.content],
        )?;

        let content = if payload.is_delete {
            DELETED_REPLY_CONTENT.to_owned()
        } else {
            content
        };

        Ok(Self {
            id,
            username,
            date,
            content,
        })
    }
}
