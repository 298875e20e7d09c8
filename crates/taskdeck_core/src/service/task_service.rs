//! Task use-case service.
//!
//! # Responsibility
//! - Provide the mutation and read API consumed by the presentation layer.
//! - Persist the collection after every confirmed change.
//! - Absorb persistence failures so the session keeps working.
//!
//! # Invariants
//! - The stored snapshot is loaded before any mutation can write, so
//!   startup never overwrites saved data with an empty collection.
//! - Every save reflects the collection as of the most recent completed
//!   mutation.
//! - Filter and search query are session-local and never persisted.

use crate::model::task::{Task, TaskId};
use crate::repo::slot_repo::SnapshotRepository;
use crate::store::task_store::TaskStore;
use crate::view::projection::{project, Filter, TaskCounts};
use log::warn;

/// Presentation-facing task service.
///
/// Owns the canonical store plus the session view state, and is the only
/// writer through the repository. All operations are synchronous and total;
/// unknown ids and invalid text are defined no-ops.
pub struct TaskService<R: SnapshotRepository> {
    store: TaskStore,
    repo: R,
    filter: Filter,
    search_query: String,
}

impl<R: SnapshotRepository> TaskService<R> {
    /// Opens the service, restoring the persisted collection first.
    ///
    /// A load failure degrades to an empty collection; there is no UI yet
    /// to report to at this point, so the error is logged and absorbed.
    pub fn open(repo: R) -> Self {
        let tasks = match repo.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("event=service_open module=service status=degraded error={err}");
                Vec::new()
            }
        };

        let mut store = TaskStore::new();
        store.replace_all(tasks);

        Self {
            store,
            repo,
            filter: Filter::default(),
            search_query: String::new(),
        }
    }

    /// Adds a task from already-trimmed presentation input.
    ///
    /// Emptiness and length are still re-checked here; rejected input
    /// returns `None` and leaves the collection unchanged.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let id = self.store.add(text)?;
        self.persist();
        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        let changed = self.store.toggle_completed(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Flips the importance flag of the task with `id`.
    pub fn toggle_important(&mut self, id: TaskId) -> bool {
        let changed = self.store.toggle_important(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Permanently removes the task with `id`.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let changed = self.store.remove(id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Sets the session filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Sets the raw session search query; lowercasing happens at match time.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Current session filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Current raw session search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Visible tasks under the current filter and search query.
    ///
    /// Recomputed from the canonical collection on every call; there is no
    /// cached view that could drift.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        project(self.store.tasks(), self.filter, &self.search_query)
    }

    /// Global counts for the stat tiles, independent of filter and search.
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::tally(self.store.tasks())
    }

    /// Read-only snapshot of the full canonical collection.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    // Best-effort write of the full collection: no retry, no user-visible
    // failure. Loss only risks durability, not in-session correctness.
    fn persist(&self) {
        if let Err(err) = self.repo.save_tasks(self.store.tasks()) {
            warn!("event=save_tasks module=service status=ignored error={err}");
        }
    }
}
