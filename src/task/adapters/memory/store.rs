//! Thread-safe in-memory implementation of the task store port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Clones share state, mirroring how a connection handle is shared across
/// service boundaries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    tasks: HashMap<String, Task>,
    owner_index: HashMap<String, Vec<String>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Removes a task id from an owner's index entry, dropping the entry when it
/// empties.
fn remove_from_index(index: &mut HashMap<String, Vec<String>>, owner: &str, task_id: &str) {
    if let Some(ids) = index.get_mut(owner) {
        ids.retain(|id| id != task_id);
        if ids.is_empty() {
            index.remove(owner);
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_by_owner(&self, owner: &UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let tasks = state
            .owner_index
            .get(owner.as_str())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn create(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let id = task.id().as_str().to_owned();
        if state.tasks.contains_key(&id) {
            return Err(TaskStoreError::AlreadyExists(task.id().clone()));
        }

        state
            .owner_index
            .entry(task.owner().as_str().to_owned())
            .or_default()
            .push(id.clone());
        state.tasks.insert(id, task.clone());
        Ok(task.clone())
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskStoreResult<Task> {
        let state = self.state.read().map_err(poisoned)?;
        state
            .tasks
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;

        let previous = state
            .tasks
            .get(task.id().as_str())
            .ok_or_else(|| TaskStoreError::UpdateFailed(task.id().clone()))?
            .clone();

        // A replace may move the document to a different partition.
        if previous.owner() != task.owner() {
            remove_from_index(
                &mut state.owner_index,
                previous.owner().as_str(),
                task.id().as_str(),
            );
            state
                .owner_index
                .entry(task.owner().as_str().to_owned())
                .or_default()
                .push(task.id().as_str().to_owned());
        }

        state
            .tasks
            .insert(task.id().as_str().to_owned(), task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let removed = state
            .tasks
            .remove(id.as_str())
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        remove_from_index(&mut state.owner_index, removed.owner().as_str(), id.as_str());
        Ok(())
    }
}
