//! Filtered and searched task projection.
//!
//! # Responsibility
//! - Provide the filter vocabulary shared with the presentation layer.
//! - Derive the visible subset and the global stat counts.
//!
//! # Invariants
//! - Filtering then searching preserves canonical collection order.
//! - Counts are always computed over the full collection, never the
//!   filtered view.

use crate::model::task::Task;

/// Named view restriction over the task collection.
///
/// Session-local state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every task passes.
    #[default]
    All,
    /// Only tasks with `completed == true`.
    Completed,
    /// Only tasks with `completed == false`.
    Uncompleted,
    /// Only tasks with `important == true`.
    Important,
}

impl Filter {
    /// Stable lowercase name, matching the presentation contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Uncompleted => "uncompleted",
            Self::Important => "important",
        }
    }

    /// Parses a presentation-provided filter name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "completed" => Some(Self::Completed),
            "uncompleted" => Some(Self::Uncompleted),
            "important" => Some(Self::Important),
            _ => None,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Uncompleted => !task.completed,
            Self::Important => task.important,
        }
    }
}

/// Derives the visible subset of `tasks` for `filter` and `query`.
///
/// The search is a case-insensitive substring match against task text; an
/// empty query matches everything. Output borrows the input and keeps its
/// order.
pub fn project<'a>(tasks: &'a [Task], filter: Filter, query: &str) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .collect()
}

/// Global stat-tile counts over the canonical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub uncompleted: usize,
    pub important: usize,
}

impl TaskCounts {
    /// Tallies counts over the full collection, ignoring filter and search.
    pub fn tally(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            completed,
            uncompleted: tasks.len() - completed,
            important: tasks.iter().filter(|task| task.important).count(),
        }
    }
}
