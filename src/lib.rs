//! Taskstore: partition-scoped task persistence.
//!
//! This crate maps CRUD operations on a "task" document onto a partitioned
//! backing store: every task belongs to an owning user (the partition key)
//! and carries an otherwise opaque payload.
//!
//! # Architecture
//!
//! Taskstore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the backing store
//! - **Adapters**: Concrete port implementations (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`config`]: Explicit, validated store configuration
//! - [`task`]: Task domain, store port, and adapters

pub mod config;
pub mod task;
