//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, persistence and views.
//! - Enforce text validation rules at construction time.
//!
//! # Invariants
//! - Every task is identified by a stable integer `TaskId`.
//! - Task text is trimmed, non-empty, and bounded in length.

pub mod task;
