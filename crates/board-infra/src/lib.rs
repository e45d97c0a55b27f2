//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//! Currently a single in-memory post store with simulated network latency.

pub mod store;

pub use store::{InMemoryPostStore, InMemoryPostStoreConfig};
