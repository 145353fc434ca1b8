//! Domain model for partition-scoped tasks.
//!
//! The task domain models the stored document shape and its identity
//! invariants while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, UserId};
pub use task::{Task, TaskPayload};
