//! Error translation and HTTP response conversion.
//!
//! Domain failures map onto a small set of response errors with fixed status
//! codes. Validation failures carry stable internal condition keys; a closed
//! translation table turns the known keys into user-facing localized
//! messages, and anything outside the table passes through unmodified.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::errors::DomainError;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Referenced resource does not exist (404).
    NotFound(String),

    /// Ownership check failed (403).
    Forbidden(String),

    /// Payload failed validation (400).
    BadRequest(String),

    /// Storage or wiring failure (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Forbidden(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "terjadi kegagalan pada server kami".into(),
        }
    }
}

/// Translates an internal validation condition key into its localized
/// message. Unknown keys come back unchanged.
pub fn translate_validation_key(key: &str) -> String {
    let message = match key {
        "THREAD_CREATION_VALIDATION.MISSING_REQUIRED_FIELDS" => {
            "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
        }
        "THREAD_CREATION_VALIDATION.INVALID_DATA_TYPES" => {
            "tidak dapat membuat thread baru karena tipe data tidak sesuai"
        }
        "THREAD_OUTPUT_VALIDATION.MISSING_REQUIRED_FIELDS" => "output thread tidak lengkap",
        "THREAD_OUTPUT_VALIDATION.INVALID_DATA_TYPES" => {
            "output thread memiliki tipe data yang tidak sesuai"
        }
        "THREAD_DETAIL_VALIDATION.MISSING_REQUIRED_FIELDS" => "detail thread tidak lengkap",
        "THREAD_DETAIL_VALIDATION.INVALID_DATA_TYPES" => {
            "detail thread memiliki tipe data yang tidak sesuai"
        }
        "COMMENT_CREATION_VALIDATION.MISSING_REQUIRED_FIELDS" => {
            "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
        }
        "COMMENT_CREATION_VALIDATION.INVALID_DATA_TYPES" => {
            "tidak dapat membuat comment baru karena tipe data tidak sesuai"
        }
        "COMMENT_OUTPUT_VALIDATION.MISSING_REQUIRED_FIELDS" => "output comment tidak lengkap",
        "COMMENT_OUTPUT_VALIDATION.INVALID_DATA_TYPES" => {
            "output comment memiliki tipe data yang tidak sesuai"
        }
        "COMMENT_DETAIL_VALIDATION.MISSING_REQUIRED_FIELDS" => "detail comment tidak lengkap",
        "COMMENT_DETAIL_VALIDATION.INVALID_DATA_TYPES" => {
            "detail comment memiliki tipe data yang tidak sesuai"
        }
        "REPLY_CREATION_VALIDATION.MISSING_REQUIRED_FIELDS" => {
            "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada"
        }
        "REPLY_CREATION_VALIDATION.INVALID_DATA_TYPES" => {
            "tidak dapat membuat balasan baru karena tipe data tidak sesuai"
        }
        "REPLY_OUTPUT_VALIDATION.MISSING_REQUIRED_FIELDS" => "output balasan tidak lengkap",
        "REPLY_OUTPUT_VALIDATION.INVALID_DATA_TYPES" => {
            "output balasan memiliki tipe data yang tidak sesuai"
        }
        "REPLY_DETAIL_VALIDATION.MISSING_REQUIRED_FIELDS" => "detail balasan tidak lengkap",
        "REPLY_DETAIL_VALIDATION.INVALID_DATA_TYPES" => {
            "detail balasan memiliki tipe data yang tidak sesuai"
        }
        other => other,
    };
    message.to_owned()
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(message) => Self::NotFound(message),
            DomainError::Authorization(message) => Self::Forbidden(message),
            DomainError::Validation(key) => Self::BadRequest(translate_validation_key(&key)),
            DomainError::Infrastructure(message) => {
                tracing::error!(infrastructure_error = %message);
                Self::Internal(message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
