//! Persistence layer abstractions and the SQLite slot implementation.
//!
//! # Responsibility
//! - Define the snapshot load/save contract used by the service layer.
//! - Isolate SQLite and wire-format details from business orchestration.
//!
//! # Invariants
//! - A saved snapshot is always the full collection, never a partial write.
//! - Load tolerates malformed and incomplete persisted data instead of
//!   failing the application.

pub mod slot_repo;
