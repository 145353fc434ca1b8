//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task id must not be empty")]
    EmptyTaskId,

    /// The owner identifier is empty after trimming.
    #[error("user id must not be empty")]
    EmptyUserId,

    /// The payload field name collides with a document identity field.
    #[error("payload field '{0}' is reserved for document identity")]
    ReservedPayloadField(String),
}
