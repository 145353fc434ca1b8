//! Task document entity.

use super::{TaskDomainError, TaskId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema-less task payload mapping field names to JSON values.
pub type TaskPayload = Map<String, Value>;

/// Field names reserved for document identity.
const RESERVED_FIELDS: [&str; 2] = ["id", "userId"];

/// A task document.
///
/// Identity lives in [`TaskId`] and the owning [`UserId`]; everything else is
/// an opaque payload the store round-trips without interpretation. The
/// serialized form is a flat document:
/// `{"id": ..., "userId": ..., <payload fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(rename = "userId")]
    owner: UserId,
    #[serde(flatten)]
    payload: TaskPayload,
}

impl Task {
    /// Creates a task with an empty payload.
    #[must_use]
    pub fn new(id: TaskId, owner: UserId) -> Self {
        Self {
            id,
            owner,
            payload: TaskPayload::new(),
        }
    }

    /// Replaces the payload wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ReservedPayloadField`] when the payload
    /// contains a field that would shadow `id` or `userId` in the flattened
    /// document.
    pub fn with_payload(mut self, payload: TaskPayload) -> Result<Self, TaskDomainError> {
        if let Some(reserved) = payload.keys().find(|key| is_reserved(key.as_str())) {
            return Err(TaskDomainError::ReservedPayloadField(reserved.clone()));
        }
        self.payload = payload;
        Ok(self)
    }

    /// Sets a single payload field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ReservedPayloadField`] for the reserved
    /// field names `id` and `userId`.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, TaskDomainError> {
        let field_name = name.into();
        if is_reserved(&field_name) {
            return Err(TaskDomainError::ReservedPayloadField(field_name));
        }
        self.payload.insert(field_name, value.into());
        Ok(self)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning principal (the partition key).
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the opaque payload.
    #[must_use]
    pub const fn payload(&self) -> &TaskPayload {
        &self.payload
    }

    /// Returns a single payload field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }
}

fn is_reserved(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}
