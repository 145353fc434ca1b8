//! Store port for partition-scoped task persistence.

use crate::task::domain::{Task, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Every operation is an independent remote call: the store holds no
/// document state between calls, applies no retries, and imposes no
/// ordering on concurrent callers. Concurrent replaces on the same id are
/// last-write-wins per the backing store.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns all tasks owned by the given principal, in the backing
    /// store's natural return order.
    ///
    /// An owner with no tasks yields an empty vector, not an error.
    async fn list_by_owner(&self, owner: &UserId) -> TaskStoreResult<Vec<Task>>;

    /// Inserts a new task document and returns the stored representation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::AlreadyExists`] when the id is already
    /// taken, or [`TaskStoreError::CreationFailed`] when the backing store
    /// accepts the call but confirms no resource.
    async fn create(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Point lookup by task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no document exists at the
    /// id.
    async fn get_by_id(&self, id: &TaskId) -> TaskStoreResult<Task>;

    /// Replaces the whole document at `task.id()` with the given content.
    ///
    /// This is a full overwrite, not a merge: callers supply the complete
    /// desired state, and payload fields absent from `task` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::UpdateFailed`] when no existing document
    /// confirms the replace. A missing id never results in an insert.
    async fn update(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Removes the document at the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no document exists at the
    /// id, matching the backing store's delete-of-absent semantics.
    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// No document exists at the requested id.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A document with the same id already exists.
    #[error("task already exists: {0}")]
    AlreadyExists(TaskId),

    /// The backing store accepted the create but confirmed no resource.
    #[error("failed to create task: {0}")]
    CreationFailed(TaskId),

    /// The backing store accepted the replace but confirmed no resource.
    #[error("failed to update task: {0}")]
    UpdateFailed(TaskId),

    /// Failure surfaced directly by the backing store's client (network,
    /// auth, throttling). Propagated untranslated.
    #[error("backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a backing-store client error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
