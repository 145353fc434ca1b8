//! Task persistence for partition-scoped document storage.
//!
//! Tasks are documents owned by a single user: the owner id is the partition
//! key, every read and list is scoped by it, and point operations resolve by
//! task id. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
