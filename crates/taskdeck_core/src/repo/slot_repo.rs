//! Snapshot persistence contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Persist the full task collection into one named key-value slot.
//! - Restore a collection from that slot, tolerating damaged data.
//!
//! # Invariants
//! - The slot value is a JSON array of task objects, nothing else.
//! - A load never fails the caller because of bad slot contents; bad
//!   contents degrade to fewer (or zero) tasks with a warn log.

use crate::db::DbError;
use crate::model::task::Task;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name of the slot holding the serialized task collection.
pub const TASKS_SLOT: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for snapshot load and save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task snapshot: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Snapshot persistence interface consumed by the service layer.
///
/// Implementations persist the collection as a whole; there is no
/// per-task write path, which keeps partial writes unobservable.
pub trait SnapshotRepository {
    /// Loads the persisted collection, or an empty one when nothing usable
    /// is stored.
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;

    /// Replaces the persisted collection with `tasks`.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over a single named slot.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSlotRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1;",
                [TASKS_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            info!("event=load_tasks module=repo status=ok source=empty_slot count=0");
            return Ok(Vec::new());
        };

        Ok(decode_snapshot(&raw))
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let serialized = serde_json::to_string(tasks).map_err(RepoError::Serialize)?;
        self.conn.execute(
            "INSERT INTO slots (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value;",
            params![TASKS_SLOT, serialized],
        )?;
        Ok(())
    }
}

/// Decodes a stored snapshot, salvaging what it can.
///
/// Tolerance rules:
/// - Top-level value that is not a JSON array: whole snapshot discarded.
/// - Entry missing `id` or `text`, or with text violating the model rules:
///   that entry dropped, the rest kept.
/// - Entry missing `completed` or `important`: flag defaults to `false`.
fn decode_snapshot(raw: &str) -> Vec<Task> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("event=load_tasks module=repo status=discarded reason=malformed_snapshot error={err}");
            return Vec::new();
        }
    };

    let total = entries.len();
    let mut tasks = Vec::with_capacity(total);
    for entry in entries {
        let mut task: Task = match serde_json::from_value(entry) {
            Ok(task) => task,
            Err(err) => {
                warn!("event=load_tasks module=repo status=dropped reason=bad_entry error={err}");
                continue;
            }
        };
        task.text = task.text.trim().to_string();
        if let Err(err) = task.validate() {
            warn!(
                "event=load_tasks module=repo status=dropped reason=invalid_text id={} error={err}",
                task.id
            );
            continue;
        }
        tasks.push(task);
    }

    info!(
        "event=load_tasks module=repo status=ok count={} dropped={}",
        tasks.len(),
        total - tasks.len()
    );
    tasks
}

#[cfg(test)]
mod tests {
    use super::decode_snapshot;

    #[test]
    fn malformed_snapshot_decodes_to_empty() {
        assert!(decode_snapshot("not json at all").is_empty());
        assert!(decode_snapshot("{\"id\":1}").is_empty());
    }

    #[test]
    fn entries_missing_required_fields_are_dropped() {
        let tasks = decode_snapshot(
            r#"[
                {"id": 1, "text": "keep"},
                {"text": "no id"},
                {"id": 3},
                {"id": 4, "text": "   "}
            ]"#,
        );
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert!(!tasks[0].completed);
        assert!(!tasks[0].important);
    }
}
