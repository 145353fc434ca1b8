//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task documents.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub id: String,
    /// Owning principal (partition key).
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub user_id: String,
    /// Opaque JSON payload.
    #[diesel(sql_type = diesel::sql_types::Jsonb)]
    pub payload: Value,
    /// Creation timestamp stamped by the store.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last-replace timestamp stamped by the store.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning principal (partition key).
    pub user_id: String,
    /// Opaque JSON payload.
    pub payload: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-replace timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied on full-document replace.
///
/// `created_at` is deliberately absent: a replace never rewrites the
/// creation timestamp.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskRowReplacement {
    /// Owning principal (partition key).
    pub user_id: String,
    /// Opaque JSON payload.
    pub payload: Value,
    /// Last-replace timestamp.
    pub updated_at: DateTime<Utc>,
}
