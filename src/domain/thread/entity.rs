use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::comment::entity::CommentDetail;
use crate::domain::errors::DomainError;
use crate::domain::validation::{DateField, field, require_strings};

/// Creation-intent payload for a new thread. Fields pass through verbatim
/// once validation succeeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [title, body, owner] = require_strings(
            "THREAD_CREATION_VALIDATION",
            [
                field(payload, "title"),
                field(payload, "body"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self { title, body, owner })
    }
}

/// Persistence result returned after a thread row has been written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [id, title, owner] = require_strings(
            "THREAD_OUTPUT_VALIDATION",
            [
                field(payload, "id"),
                field(payload, "title"),
                field(payload, "owner"),
            ],
        )?;
        Ok(Self { id, title, owner })
    }
}

/// Thread row as the storage adapter returns it, author already joined in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Loosely-typed input for [`ThreadDetail`]. The scalar fields go through the
/// validation protocol; comments are already assembled detail objects.
#[derive(Debug, Default)]
pub struct ThreadDetailPayload {
    pub id: Value,
    pub title: Value,
    pub body: Value,
    pub date: DateField,
    pub username: Value,
    pub comments: Vec<CommentDetail>,
}

impl ThreadDetailPayload {
    pub fn from_row(row: ThreadRow) -> Self {
        Self {
            id: Value::String(row.id),
            title: Value::String(row.title),
            body: Value::String(row.body),
            date: DateField::Timestamp(row.date),
            username: Value::String(row.username),
            comments: Vec::new(),
        }
    }
}

/// Read-model root for one thread, assembled fresh on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

impl ThreadDetail {
    pub fn new(payload: ThreadDetailPayload) -> Result<Self, DomainError> {
        // Typed timestamps become ISO-8601 strings before validation runs.
        let date = payload.date.normalize();
        let [id, title, body, date, username] = require_strings(
            "THREAD_DETAIL_VALIDATION",
            [
                &payload.id,
                &payload.title,
                &payload.body,
                &date,
                &payload.username,
            ],
        )?;
        Ok(Self {
            id,
            title,
            body,
            date,
            username,
            comments: payload.comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn add_thread_keeps_input_fields_verbatim() {
        let payload = json!({
            "title": "sebuah thread",
            "body": "sebuah body thread",
            "owner": "user-123",
        });

        let thread = AddThread::new(&payload).unwrap();

        assert_eq!(thread.title, "sebuah thread");
        assert_eq!(thread.body, "sebuah body thread");
        assert_eq!(thread.owner, "user-123");
    }

    #[test]
    fn add_thread_rejects_missing_fields() {
        let err = AddThread::new(&json!({ "title": "sebuah thread" })).unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_CREATION_VALIDATION.MISSING_REQUIRED_FIELDS")
        );
    }

    #[test]
    fn add_thread_rejects_wrong_types() {
        let payload = json!({ "title": 123, "body": true, "owner": "user-123" });
        let err = AddThread::new(&payload).unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_CREATION_VALIDATION.INVALID_DATA_TYPES")
        );
    }

    #[test]
    fn added_thread_validates_output_shape() {
        let added = AddedThread::new(&json!({
            "id": "thread-123",
            "title": "sebuah thread",
            "owner": "user-123",
        }))
        .unwrap();
        assert_eq!(added.id, "thread-123");

        let err = AddedThread::new(&json!({ "id": "thread-123" })).unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_OUTPUT_VALIDATION.MISSING_REQUIRED_FIELDS")
        );

        let err = AddedThread::new(&json!({
            "id": "thread-123",
            "title": 99,
            "owner": "user-123",
        }))
        .unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_OUTPUT_VALIDATION.INVALID_DATA_TYPES")
        );
    }

    #[test]
    fn thread_detail_normalizes_typed_dates() {
        let date = Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, 9).unwrap();
        let detail = ThreadDetail::new(ThreadDetailPayload {
            id: json!("thread-123"),
            title: json!("sebuah thread"),
            body: json!("sebuah body thread"),
            date: DateField::Timestamp(date),
            username: json!("dicoding"),
            comments: Vec::new(),
        })
        .unwrap();

        assert_eq!(detail.date, "2021-08-08T07:19:09.000Z");
        assert!(detail.comments.is_empty());
    }

    #[test]
    fn thread_detail_rejects_non_string_date() {
        let err = ThreadDetail::new(ThreadDetailPayload {
            id: json!("thread-123"),
            title: json!("sebuah thread"),
            body: json!("sebuah body thread"),
            date: DateField::Raw(json!(20210808)),
            username: json!("dicoding"),
            comments: Vec::new(),
        })
        .unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_DETAIL_VALIDATION.INVALID_DATA_TYPES")
        );
    }

    #[test]
    fn thread_detail_rejects_empty_fields() {
        let err = ThreadDetail::new(ThreadDetailPayload {
            id: json!("thread-123"),
            title: json!(""),
            body: json!("sebuah body thread"),
            date: "2021-08-08T07:19:09.775Z".into(),
            username: json!("dicoding"),
            comments: Vec::new(),
        })
        .unwrap_err();
        assert_eq!(
            err.validation_key(),
            Some("THREAD_DETAIL_VALIDATION.MISSING_REQUIRED_FIELDS")
        );
    }
}
