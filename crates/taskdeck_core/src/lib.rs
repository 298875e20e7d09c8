//! Core domain logic for taskdeck.
//! This crate is the single source of truth for task-tracking invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError, MAX_TASK_TEXT_CHARS};
pub use repo::slot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSlotRepository, TASKS_SLOT,
};
pub use service::task_service::TaskService;
pub use store::task_store::TaskStore;
pub use view::projection::{project, Filter, TaskCounts};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
