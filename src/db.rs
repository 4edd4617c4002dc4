//! Task repository and display helpers.
//!
//! This module provides the `Repository` struct for storing and managing
//! tasks, along with the formatting helpers used by the `list` command.
//! The whole collection is the unit of persistence: every mutation loads
//! the full file, changes one task in memory, and rewrites the file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::TaskError;
use crate::task::{Status, StatusFilter, Task};

/// File-backed store for the task collection.
///
/// Constructed with an explicit storage path; commands operate on a
/// `Repository` value rather than an implicit process-wide file name.
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    pub tasks: Vec<Task>,
}

impl Repository {
    /// Load the task collection from `path`.
    ///
    /// A missing or unreadable file is an error. Content that is present
    /// but fails to parse yields an empty collection instead; the corrupt
    /// file is then replaced wholesale on the next save.
    pub fn load(path: &Path) -> Result<Self, TaskError> {
        let buf = fs::read_to_string(path).map_err(|source| TaskError::StorageRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tasks = serde_json::from_str(&buf).unwrap_or_default();
        Ok(Repository {
            path: path.to_path_buf(),
            tasks,
        })
    }

    /// Serialise the full collection and overwrite the storage file.
    pub fn save(&self) -> Result<(), TaskError> {
        let data = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, data).map_err(|source| TaskError::StorageWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Generate the ID for the next task: one past the last element's ID.
    ///
    /// This is the last element's ID, not the maximum. Mid-list deletions
    /// leave the highest ID at the tail so IDs are never reused, but
    /// deleting the tail entry itself lets its ID be issued again.
    pub fn next_id(&self) -> u64 {
        self.tasks.last().map_or(1, |t| t.id + 1)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove the first task with `id`, keeping the rest in order.
    /// Returns false if no task matched.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(i) => {
                self.tasks.remove(i);
                true
            }
            None => false,
        }
    }

    /// Tasks passing `filter`, in insertion order.
    pub fn filter(&self, filter: StatusFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t.status)).collect()
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "todo",
        Status::InProgress => "in-progress",
        Status::Done => "done",
    }
}

/// Render how long before `now` the instant `t` was.
///
/// Under a minute reads "just now"; otherwise whole minutes, hours, or
/// days. Durations are floored, not rounded.
pub fn time_ago(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(t);
    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{} minutes ago", diff.num_minutes())
    } else if diff.num_hours() < 24 {
        format!("{} hours ago", diff.num_hours())
    } else {
        format!("{} days ago", diff.num_days())
    }
}

/// Print one line per task: ID, description, status, relative update time.
pub fn print_tasks(tasks: &[&Task]) {
    let now = Utc::now();
    for t in tasks {
        println!(
            "[{}] {} ({}) - {}",
            t.id,
            t.description,
            format_status(t.status),
            time_ago(t.updated_at, now)
        );
    }
}
