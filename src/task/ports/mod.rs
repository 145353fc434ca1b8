//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces implemented by the
//! storage adapters.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
