//! In-memory task store.
//!
//! # Responsibility
//! - Own the ordered task collection and allocate ids.
//! - Apply add/toggle/remove mutations and report whether anything changed.
//!
//! # Invariants
//! - Ids come from a monotonic counter seeded above the largest loaded id,
//!   never from wall-clock time.
//! - Unknown-id mutations are defined no-ops, not errors.
//! - Only immutable views of the collection escape this type.

use crate::model::task::{Task, TaskId};
use log::{debug, warn};
use std::collections::HashSet;

/// Owner of the canonical ordered task collection.
///
/// The store is pure in-memory state; persistence and view derivation live
/// in their own layers and consume the snapshot returned by [`tasks`].
///
/// [`tasks`]: TaskStore::tasks
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store with the id counter at its starting value.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new task with cleared flags and a fresh id.
    ///
    /// The text is trimmed and validated here even though the input boundary
    /// is expected to have done so already; invalid text is a silent no-op
    /// returning `None`.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let task = match Task::new(self.next_id, text) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=add_task module=store status=rejected reason={err}");
                return None;
            }
        };

        let id = task.id;
        self.next_id += 1;
        self.tasks.push(task);
        debug!("event=add_task module=store status=ok id={id}");
        Some(id)
    }

    /// Flips `completed` on the task with `id`.
    ///
    /// Returns whether the collection changed; an unknown id changes nothing.
    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Flips `important` on the task with `id`.
    ///
    /// Returns whether the collection changed; an unknown id changes nothing.
    pub fn toggle_important(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.important = !task.important;
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id` permanently.
    ///
    /// Returns whether the collection changed; repeating the call for the
    /// same id is a no-op.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Installs a loaded collection and re-seeds the id counter.
    ///
    /// Entries with a duplicate id are dropped (first occurrence wins) so
    /// the uniqueness invariant holds even against hand-edited snapshots.
    /// The counter resumes one above the largest surviving id.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::new();
        let mut accepted = Vec::with_capacity(tasks.len());
        for task in tasks {
            if !seen.insert(task.id) {
                warn!(
                    "event=load_tasks module=store status=dropped reason=duplicate_id id={}",
                    task.id
                );
                continue;
            }
            accepted.push(task);
        }

        self.next_id = accepted
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.tasks = accepted;
    }

    /// Immutable snapshot of the canonical collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
