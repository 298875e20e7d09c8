//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its validation rules.
//! - Keep the persisted wire shape tolerant of older snapshots.
//!
//! # Invariants
//! - `text` is trimmed, non-empty, and at most [`MAX_TASK_TEXT_CHARS`]
//!   characters (Unicode scalar values, not bytes).
//! - `completed` and `important` decode as `false` when absent from a
//!   persisted snapshot.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are allocated by the store from a monotonic counter, never from
/// wall-clock time, so two tasks created in the same instant still get
/// distinct ids.
pub type TaskId = i64;

/// Upper bound on task text length, counted in characters.
pub const MAX_TASK_TEXT_CHARS: usize = 50;

/// Validation failure for task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming surrounding whitespace.
    EmptyText,
    /// Text exceeds [`MAX_TASK_TEXT_CHARS`] characters after trimming.
    TextTooLong { chars: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text is empty after trimming"),
            Self::TextTooLong { chars } => write!(
                f,
                "task text is {chars} characters; maximum is {MAX_TASK_TEXT_CHARS}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// The wire shape matches the persisted snapshot format: a JSON object with
/// `id`, `text`, `completed`, `important`. Both flags default to `false`
/// so snapshots written before a flag existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for lookups and mutation targeting.
    pub id: TaskId,
    /// Short human-entered description, trimmed and length-bounded.
    pub text: String,
    /// Whether the task has been checked off.
    #[serde(default)]
    pub completed: bool,
    /// Whether the task is starred as important.
    #[serde(default)]
    pub important: bool,
}

impl Task {
    /// Creates a task with validated text and both flags cleared.
    ///
    /// The text is trimmed before validation; the trimmed form is stored.
    pub fn new(id: TaskId, text: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let text = validate_text(text.as_ref())?;
        Ok(Self {
            id,
            text,
            completed: false,
            important: false,
        })
    }

    /// Re-checks the text invariant on an existing record.
    ///
    /// Used when loading persisted snapshots, where entries may predate the
    /// current rules or have been edited out-of-band.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_text(&self.text).map(|_| ())
    }
}

/// Trims `text` and checks the emptiness and length rules.
///
/// Returns the trimmed text on success so callers store the canonical form.
pub fn validate_text(text: &str) -> Result<String, TaskValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyText);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_TASK_TEXT_CHARS {
        return Err(TaskValidationError::TextTooLong { chars });
    }
    Ok(trimmed.to_string())
}
