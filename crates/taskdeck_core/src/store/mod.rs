//! Canonical task collection ownership.
//!
//! # Responsibility
//! - Hold the single mutable task collection and its id counter.
//! - Apply all collection mutations; nothing else writes tasks.
//!
//! # Invariants
//! - Task ids are unique within the collection.
//! - Insertion order is preserved; there is no other ordering.

pub mod task_store;
