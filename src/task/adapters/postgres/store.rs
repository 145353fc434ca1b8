//! `PostgreSQL` implementation of the task store port.

use super::{
    models::{NewTaskRow, TaskRow, TaskRowReplacement},
    schema::tasks,
};
use crate::config::StoreConfig;
use crate::task::{
    domain::{Task, TaskId, TaskPayload, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
///
/// Holds a one-time-initialized connection pool and an injected clock for
/// stamping document timestamps; no other state is kept between calls.
#[derive(Clone)]
pub struct PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    pool: TaskPgPool,
    clock: Arc<C>,
}

impl<C> PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store from an existing connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    /// Builds a pool from validated configuration and creates the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the pool cannot be built
    /// against the configured endpoint.
    pub fn from_config(config: &StoreConfig, clock: Arc<C>) -> TaskStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url());
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskStoreError::backend)?;
        Ok(Self::new(pool, clock))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::backend)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::backend)?
    }
}

#[async_trait]
impl<C> TaskStore for PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn list_by_owner(&self, owner: &UserId) -> TaskStoreResult<Vec<Task>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(&owner_key))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::backend)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn create(&self, task: &Task) -> TaskStoreResult<Task> {
        let task_id = task.id().clone();
        let timestamp = self.clock.utc();
        let new_row = NewTaskRow {
            id: task.id().as_str().to_owned(),
            user_id: task.owner().as_str().to_owned(),
            payload: Value::Object(task.payload().clone()),
            created_at: timestamp,
            updated_at: timestamp,
        };

        self.run_blocking(move |connection| {
            let stored = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::AlreadyExists(task_id.clone())
                    }
                    _ => TaskStoreError::backend(err),
                })?
                .ok_or_else(|| TaskStoreError::CreationFailed(task_id.clone()))?;
            row_to_task(stored)
        })
        .await
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskStoreResult<Task> {
        let lookup_id = id.clone();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(lookup_id.as_str())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::backend)?
                .ok_or_else(|| TaskStoreError::NotFound(lookup_id.clone()))?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<Task> {
        let task_id = task.id().clone();
        let replacement = TaskRowReplacement {
            user_id: task.owner().as_str().to_owned(),
            payload: Value::Object(task.payload().clone()),
            updated_at: self.clock.utc(),
        };

        self.run_blocking(move |connection| {
            let stored = diesel::update(tasks::table.find(task_id.as_str()))
                .set(&replacement)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::backend)?
                .ok_or_else(|| TaskStoreError::UpdateFailed(task_id.clone()))?;
            row_to_task(stored)
        })
        .await
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let lookup_id = id.clone();
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(lookup_id.as_str()))
                .execute(connection)
                .map_err(TaskStoreError::backend)?;
            if deleted == 0 {
                return Err(TaskStoreError::NotFound(lookup_id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let id = TaskId::new(row.id).map_err(TaskStoreError::backend)?;
    let owner = UserId::new(row.user_id).map_err(TaskStoreError::backend)?;
    let payload: TaskPayload =
        serde_json::from_value(row.payload).map_err(TaskStoreError::backend)?;

    Task::new(id, owner)
        .with_payload(payload)
        .map_err(TaskStoreError::backend)
}
