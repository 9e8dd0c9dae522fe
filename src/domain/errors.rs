use thiserror::Error;

/// Failures raised by the forum core.
///
/// `Validation` carries the stable condition key produced by an entity
/// constructor or a use-case payload check (for example
/// `THREAD_CREATION_VALIDATION.MISSING_REQUIRED_FIELDS`); the presentation
/// layer translates known keys into user-facing messages. `NotFound` and
/// `Authorization` propagate unchanged to the boundary.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("authorization: {0}")]
    Authorization(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Builds a validation error from a scope and a condition name,
    /// e.g. `COMMENT_DETAIL_VALIDATION` + `INVALID_DATA_TYPES`.
    pub fn validation(scope: &str, condition: &str) -> Self {
        Self::Validation(format!("{scope}.{condition}"))
    }

    /// Returns the condition key for validation errors.
    pub fn validation_key(&self) -> Option<&str> {
        match self {
            Self::Validation(key) => Some(key),
            _ => None,
        }
    }
}
